//! Inline SVG icons for the dashboard cards.
//!
//! Outline style adapted from Lucide (https://lucide.dev), ISC licensed.

use maud::{Markup, html};

/// The icons available to dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Icon {
    Wallet,
    Building,
    TrendingUp,
    FileText,
    Plus,
    ArrowRight,
}

impl Icon {
    /// Render the icon as an inline stroke SVG, sized and colored by `class`.
    pub(super) fn markup(self, class: &str) -> Markup {
        html! {
            svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class=(class)
                aria-hidden="true"
            {
                @match self {
                    Icon::Wallet => {
                        path d="M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" {}
                        path d="M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" {}
                    }
                    Icon::Building => {
                        rect width="16" height="20" x="4" y="2" rx="2" {}
                        path d="M9 22v-4h6v4" {}
                        path d="M8 6h.01" {}
                        path d="M16 6h.01" {}
                        path d="M12 6h.01" {}
                        path d="M8 10h.01" {}
                        path d="M16 10h.01" {}
                        path d="M12 10h.01" {}
                        path d="M8 14h.01" {}
                        path d="M16 14h.01" {}
                        path d="M12 14h.01" {}
                    }
                    Icon::TrendingUp => {
                        polyline points="22 7 13.5 15.5 8.5 10.5 2 17" {}
                        polyline points="16 7 22 7 22 13" {}
                    }
                    Icon::FileText => {
                        path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" {}
                        path d="M14 2v4a2 2 0 0 0 2 2h4" {}
                        path d="M10 9H8" {}
                        path d="M16 13H8" {}
                        path d="M16 17H8" {}
                    }
                    Icon::Plus => {
                        path d="M5 12h14" {}
                        path d="M12 5v14" {}
                    }
                    Icon::ArrowRight => {
                        path d="M5 12h14" {}
                        path d="m12 5 7 7-7 7" {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod icon_tests {
    use super::Icon;

    #[test]
    fn renders_svg_with_class() {
        let html = Icon::Plus.markup("h-5 w-5").into_string();

        assert!(html.starts_with("<svg"));
        assert!(html.contains("class=\"h-5 w-5\""));
        assert!(html.contains("aria-hidden=\"true\""));
    }
}
