use url::Url;

/// The page address a session runs under.
pub trait Location {
    /// Fragment without the leading `#`, `None` when absent or empty.
    fn fragment(&self) -> Option<String>;
    /// Swap the fragment in place. Must not add a history entry.
    fn replace_fragment(&mut self, fragment: &str);
    fn href(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct PageLocation {
    url: Url,
    history: Vec<Url>,
}

impl PageLocation {
    pub fn parse(href: &str) -> anyhow::Result<Self> {
        let url = Url::parse(href)?;
        Ok(Self {
            history: vec![url.clone()],
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Navigate to a new address, pushing a history entry. `href` may be
    /// relative, e.g. `#token` or `?x=1`, and resolves against the current url.
    pub fn navigate(&mut self, href: &str) -> anyhow::Result<()> {
        let url = self.url.join(href)?;
        self.history.push(url.clone());
        self.url = url;
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Location for PageLocation {
    fn fragment(&self) -> Option<String> {
        self.url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(str::to_string)
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.url.set_fragment(Some(fragment));
        if let Some(current) = self.history.last_mut() {
            *current = self.url.clone();
        }
    }

    fn href(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment() -> anyhow::Result<()> {
        let location = PageLocation::parse("http://localhost:3000/#abc")?;
        assert_eq!(location.fragment(), Some("abc".to_string()));
        let location = PageLocation::parse("http://localhost:3000/#")?;
        assert_eq!(location.fragment(), None);
        let location = PageLocation::parse("http://localhost:3000/")?;
        assert_eq!(location.fragment(), None);
        Ok(())
    }

    #[test]
    fn test_replace_fragment_keeps_history() -> anyhow::Result<()> {
        // Given
        let mut location = PageLocation::parse("http://localhost:3000/card?x=1")?;

        // When
        location.replace_fragment("dGVzdA==");
        location.replace_fragment("b3RoZXI=");

        // Expect
        assert_eq!(location.history_len(), 1);
        assert_eq!(location.href(), "http://localhost:3000/card?x=1#b3RoZXI=");
        assert_eq!(location.fragment(), Some("b3RoZXI=".to_string()));
        Ok(())
    }

    #[test]
    fn test_navigate_pushes_history() -> anyhow::Result<()> {
        let mut location = PageLocation::parse("http://localhost:3000/")?;
        location.navigate("/other")?;
        assert_eq!(location.history_len(), 2);
        assert_eq!(location.href(), "http://localhost:3000/other");
        Ok(())
    }
}
