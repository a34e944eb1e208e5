use qrcode::{
    render::{svg, unicode},
    QrCode,
};
use tracing::debug;

use crate::preview::links;

/// Format the scannable code is drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QrFormat {
    /// Half-block characters, two modules per cell, for a terminal.
    #[default]
    Text,
    Svg,
}

/// Encode the share link of the page at `href` and draw it.
pub fn render_share_qr(href: &str, format: QrFormat) -> anyhow::Result<String> {
    let payload = links::qr_payload(href)?;
    debug!("rendering {format:?} qr code for {payload}");
    render(&payload, format)
}

pub fn render(payload: &str, format: QrFormat) -> anyhow::Result<String> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = match format {
        // swapped so the code scans as dark on light in a dark terminal
        QrFormat::Text => code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build(),
        QrFormat::Svg => code
            .render::<svg::Color>()
            .min_dimensions(200, 200)
            .build(),
    };
    Ok(image)
}
