//! Static company details shown beside the form

/// One block of the info panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const COMPANY_NAME: &str = "Your Company Name";

pub const HERO_TITLE: &str = "Get In Touch";
pub const HERO_TAGLINE: &str = "We'd love to hear from you. Whether you have a question about our \
services, pricing, or anything else, our team is ready to answer all your questions.";

pub const INFO_INTRO: &str =
    "Have questions? We're here to help and answer any question you might have.";

pub const CONTACT_INFO: &[InfoItem] = &[
    InfoItem {
        icon: "⌂",
        title: "Address",
        lines: &["123 Business Street", "New York, NY 10001"],
    },
    InfoItem {
        icon: "☎",
        title: "Phone",
        lines: &["+1 (555) 123-4567"],
    },
    InfoItem {
        icon: "✉",
        title: "Email",
        lines: &["info@yourbrand.com"],
    },
    InfoItem {
        icon: "◷",
        title: "Business Hours",
        lines: &[
            "Monday - Friday: 9:00 AM - 6:00 PM",
            "Saturday: 10:00 AM - 4:00 PM",
        ],
    },
];

/// Rows the info items need, one per title and line plus a gap between items
pub fn info_height() -> u16 {
    let rows: usize = CONTACT_INFO.iter().map(|item| item.lines.len() + 2).sum();
    rows.saturating_sub(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_has_lines() {
        assert!(CONTACT_INFO.iter().all(|item| !item.lines.is_empty()));
    }

    #[test]
    fn test_info_height_counts_titles_lines_and_gaps() {
        // 4 titles + 6 lines + 3 gaps
        assert_eq!(info_height(), 13);
    }
}
