//! Application Configuration

/// Content application configuration
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Articles returned by the news list
    pub news_limit: u32,
    /// Opportunities fetched before the open-spots filter
    pub opportunity_limit: u32,
    /// Page bound for the derived-slug scan (resolution stage 3)
    pub scan_page_size: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            news_limit: 5,
            opportunity_limit: 10,
            scan_page_size: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContentConfig::default();
        assert_eq!(config.news_limit, 5);
        assert_eq!(config.opportunity_limit, 10);
        assert_eq!(config.scan_page_size, 100);
    }
}
