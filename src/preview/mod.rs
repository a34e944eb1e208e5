pub mod links;
pub mod qr;
pub mod vcard;
