/// Link shipped in the content file until a real booking page is set up.
pub const PLACEHOLDER_LINK: &str = "https://calendly.com/your-link";

pub const EMBED_WIDTH: &str = "100%";
pub const EMBED_HEIGHT_PX: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMode {
    /// Show the external booking page in an iframe.
    Embed,
    /// Show the in-page appointment picker.
    LocalPicker,
}

/// Picks the render path for a scheduling link.
///
/// This is a plain substring test against the placeholder, so a link that merely
/// looks real is treated as configured.
pub fn scheduler_mode(link: &str) -> SchedulerMode {
    let link = link.trim();
    if link.is_empty() || link.contains(PLACEHOLDER_LINK) {
        SchedulerMode::LocalPicker
    } else {
        SchedulerMode::Embed
    }
}

pub fn is_configured(link: &str) -> bool {
    scheduler_mode(link) == SchedulerMode::Embed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_falls_back() {
        assert_eq!(scheduler_mode(PLACEHOLDER_LINK), SchedulerMode::LocalPicker);
        assert_eq!(
            scheduler_mode("https://calendly.com/your-link/30min"),
            SchedulerMode::LocalPicker
        );
        assert!(!is_configured(""));
        assert!(!is_configured("   "));
    }

    #[test]
    fn test_real_link_embeds() {
        assert!(is_configured("https://calendly.com/kaaviya/intro-call"));
        assert_eq!(
            scheduler_mode(" https://cal.com/kaaviya "),
            SchedulerMode::Embed
        );
    }

    #[test]
    fn test_embed_size() {
        assert_eq!(EMBED_WIDTH, "100%");
        assert_eq!(EMBED_HEIGHT_PX.to_string(), "600");
    }
}
