//! Static page content: the ordered records each landing page displays.
//!
//! Nothing here is validated or transformed; renderers only iterate.

use std::time::Duration;

use super::reveal::Reveal;

/// Which landing page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// LuxeStay: multi-destination hotel finder.
    #[default]
    Luxe,
    /// Ananta Heritage Udaipur: single palace hotel.
    Ananta,
}

/// A navigation entry.  `anchor` names a document section (`"#"` = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// A hotel or room card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing {
    pub name: &'static str,
    pub location: Option<&'static str>,
    pub price: &'static str,
    pub per: &'static str,
    pub rating: Option<f32>,
    pub description: Option<&'static str>,
    pub amenities: &'static [&'static str],
    pub action: &'static str,
    /// Opaque asset reference, shown as a caption.
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Hero banner copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub eyebrow: Option<&'static str>,
    pub title: &'static [&'static str],
    pub subtitle: &'static str,
    /// Opaque background asset reference.
    pub image: &'static str,
}

/// A titled prose section (story / experiences).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub anchor: &'static str,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub stats: &'static [Stat],
    pub quote: Option<&'static str>,
}

/// Entrance timings.  Defaults mirror each page's intro choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub eyebrow: Reveal,
    pub title: Reveal,
    pub subtitle: Reveal,
    pub search: Reveal,
    /// Base reveal of an in-view section; cards add `card_stagger` each.
    pub section: Reveal,
    pub card_stagger: Duration,
    pub feature_stagger: Duration,
}

impl Timings {
    /// Uniformly speed up (`factor > 1`) or slow down every delay and duration.
    /// A factor of `0` or below disables entrance animation altogether.
    pub fn scaled(self, factor: f64) -> Self {
        let s = |d: Duration| {
            if factor <= 0.0 {
                Duration::ZERO
            } else {
                Duration::try_from_secs_f64(d.as_secs_f64() / factor).unwrap_or(Duration::MAX)
            }
        };
        let r = |r: Reveal| Reveal::new(s(r.delay), s(r.duration));
        Self {
            eyebrow: r(self.eyebrow),
            title: r(self.title),
            subtitle: r(self.subtitle),
            search: r(self.search),
            section: r(self.section),
            card_stagger: s(self.card_stagger),
            feature_stagger: s(self.feature_stagger),
        }
    }
}

/// Behavioural differences between the two pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTraits {
    /// Navbar turns solid while the menu overlay is open, even at the top.
    pub solid_nav_when_menu_open: bool,
    pub progress_bar: bool,
    pub parallax_hero: bool,
}

const fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

impl Page {
    pub const ALL: &[Page] = &[Page::Luxe, Page::Ananta];

    pub fn label(self) -> &'static str {
        match self {
            Page::Luxe => "luxe",
            Page::Ananta => "ananta",
        }
    }

    pub fn brand(self) -> &'static str {
        match self {
            Page::Luxe => "LuxeStay.",
            Page::Ananta => "ANANTA",
        }
    }

    pub fn brand_tagline(self) -> Option<&'static str> {
        match self {
            Page::Luxe => None,
            Page::Ananta => Some("HERITAGE UDAIPUR"),
        }
    }

    pub fn traits(self) -> PageTraits {
        match self {
            Page::Luxe => PageTraits {
                solid_nav_when_menu_open: true,
                progress_bar: false,
                parallax_hero: false,
            },
            Page::Ananta => PageTraits {
                solid_nav_when_menu_open: false,
                progress_bar: true,
                parallax_hero: true,
            },
        }
    }

    pub fn timings(self) -> Timings {
        match self {
            Page::Luxe => Timings {
                eyebrow: Reveal::new(ms(0), ms(800)),
                title: Reveal::new(ms(0), ms(800)),
                subtitle: Reveal::new(ms(0), ms(800)),
                search: Reveal::new(ms(300), ms(800)),
                section: Reveal::new(ms(0), ms(500)),
                card_stagger: ms(100),
                feature_stagger: ms(200),
            },
            Page::Ananta => Timings {
                eyebrow: Reveal::new(ms(2_200), ms(800)),
                title: Reveal::new(ms(2_400), ms(800)),
                subtitle: Reveal::new(ms(2_600), ms(800)),
                search: Reveal::new(ms(3_000), ms(900)),
                section: Reveal::new(ms(0), ms(800)),
                card_stagger: ms(200),
                feature_stagger: ms(0),
            },
        }
    }

    pub fn nav_links(self) -> &'static [NavLink] {
        match self {
            Page::Luxe => &[
                NavLink { label: "Destinations", anchor: "#featured" },
                NavLink { label: "Hotels", anchor: "#featured" },
                NavLink { label: "Flights", anchor: "#" },
                NavLink { label: "Offers", anchor: "#features" },
            ],
            Page::Ananta => &[
                NavLink { label: "Home", anchor: "#" },
                NavLink { label: "Suites", anchor: "#rooms" },
                NavLink { label: "Dining", anchor: "#dining" },
                NavLink { label: "Ayurveda", anchor: "#wellness" },
            ],
        }
    }

    /// Label of the booking call-to-action in the navbar and menu overlay.
    pub fn nav_cta(self) -> &'static str {
        match self {
            Page::Luxe => "Sign In",
            Page::Ananta => "Book Stay",
        }
    }

    pub fn menu_cta(self) -> &'static str {
        match self {
            Page::Luxe => "Sign In",
            Page::Ananta => "Reserve Your Stay",
        }
    }

    pub fn search_cta(self) -> &'static str {
        match self {
            Page::Luxe => "Search",
            Page::Ananta => "Check Availability",
        }
    }

    pub fn hero(self) -> HeroCopy {
        match self {
            Page::Luxe => HeroCopy {
                eyebrow: None,
                title: &["Discover Your Next", "Extraordinary Escape"],
                subtitle: "Experience world-class hospitality in the most breathtaking locations across the globe.",
                image: "photo-1542314831-068cd1dbfeeb",
            },
            Page::Ananta => HeroCopy {
                eyebrow: Some("ESTD. 1920"),
                title: &["Royal Heritage", "Awaits"],
                subtitle: "An sanctuary of Rajputana grandeur in the heart of the City of Lakes.",
                image: "assets/images/hero.jpg",
            },
        }
    }

    pub fn story(self) -> Option<Story> {
        match self {
            Page::Luxe => None,
            Page::Ananta => Some(Story {
                anchor: "#heritage",
                eyebrow: "100 YEARS OF ROYALTY",
                title: "Where Heritage Meets Luxury",
                paragraphs: &[
                    "Standing majestically on the banks of Lake Pichola, Ananta Heritage is more than a hotel. It is a living legacy of the Mewar dynasty.",
                    "Every stone tells a story, every corridor echoes with history. Renovated to perfection, we blend the architectural marvels of the 19th century with the sophisticated comforts of the modern world.",
                ],
                stats: &[
                    Stat { value: "54", label: "Royal Suites" },
                    Stat { value: "3", label: "Restaurants" },
                    Stat { value: "15", label: "Awards" },
                ],
                quote: Some("\"Best Heritage Hotel 2025\""),
            }),
        }
    }

    /// Heading for the card grid: `(anchor, eyebrow, title, blurb)`.
    pub fn listings_heading(self) -> (&'static str, &'static str, &'static str, Option<&'static str>) {
        match self {
            Page::Luxe => (
                "#featured",
                "EXCLUSIVE STAYS",
                "Featured Luxury Destinations",
                Some("Handpicked distinct hotels that offer an unforgettable experience."),
            ),
            Page::Ananta => ("#rooms", "ACCOMMODATIONS", "Suites & Havelis", None),
        }
    }

    pub fn listings(self) -> &'static [Listing] {
        match self {
            Page::Luxe => &[
                Listing {
                    name: "The Royal Atlantis",
                    location: Some("Dubai, UAE"),
                    price: "$450",
                    per: "/ night",
                    rating: Some(4.9),
                    description: None,
                    amenities: &["Wifi", "Pool", "TV"],
                    action: "Details",
                    image: "photo-1566073771259-6a8506099945",
                },
                Listing {
                    name: "Grand Hotel Tremezzo",
                    location: Some("Lake Como, Italy"),
                    price: "$620",
                    per: "/ night",
                    rating: Some(5.0),
                    description: None,
                    amenities: &["Wifi", "Pool", "TV"],
                    action: "Details",
                    image: "photo-1520250497591-112f2f40a3f4",
                },
                Listing {
                    name: "Six Senses",
                    location: Some("Bali, Indonesia"),
                    price: "$320",
                    per: "/ night",
                    rating: Some(4.8),
                    description: None,
                    amenities: &["Wifi", "Pool", "TV"],
                    action: "Details",
                    image: "photo-1571003123894-1f0594d2b5d9",
                },
            ],
            Page::Ananta => &[
                Listing {
                    name: "Lake View Haveli",
                    location: None,
                    price: "₹18,000",
                    per: "/ Night",
                    rating: None,
                    description: Some("Panoramic views of the lake with authentic Jharokha seating."),
                    amenities: &[],
                    action: "Book This Suite",
                    image: "assets/images/hotel-1.jpg",
                },
                Listing {
                    name: "Maharaja Royal Suite",
                    location: None,
                    price: "₹35,000",
                    per: "/ Night",
                    rating: None,
                    description: Some("Expansive living spaces adorned with frescoes and crystal chandeliers."),
                    amenities: &[],
                    action: "Book This Suite",
                    image: "assets/images/hotel-2.jpg",
                },
                Listing {
                    name: "Heritage Garden Villa",
                    location: None,
                    price: "₹25,000",
                    per: "/ Night",
                    rating: None,
                    description: Some("Private courtyard access with a plunge pool and outdoor shower."),
                    amenities: &[],
                    action: "Book This Suite",
                    image: "assets/images/hotel-3.jpg",
                },
            ],
        }
    }

    /// Heading for the feature grid: `(anchor, eyebrow, title, blurb)`.
    pub fn features_heading(self) -> (&'static str, Option<&'static str>, Option<&'static str>, Option<&'static str>) {
        match self {
            Page::Luxe => ("#features", None, None, None),
            Page::Ananta => (
                "#experiences",
                Some("CURATED EXPERIENCES"),
                Some("We Craft Memories."),
                Some("From the moment you arrive, every detail is meticulously planned. Whether it's a private boat ride on Pichola or a spa therapy using ancient Vedic oils, your stay is our masterpiece."),
            ),
        }
    }

    pub fn features(self) -> &'static [Feature] {
        match self {
            Page::Luxe => &[
                Feature { glyph: "★", title: "5-Star Service", desc: "Experience the highest standard of hospitality and care." },
                Feature { glyph: "⌖", title: "Prime Locations", desc: "Stay in the heart of the city or hidden natural gems." },
                Feature { glyph: "▦", title: "Easy Booking", desc: "Seamless reservation process with flexible cancellation." },
            ],
            Page::Ananta => &[
                Feature { glyph: "⚘", title: "Royal Dining", desc: "Authentic Mewari cuisine served under the stars." },
                Feature { glyph: "◆", title: "Jiva Spa", desc: "Rejuvenate with therapies inspired by Indian royalty." },
                Feature { glyph: "⌖", title: "Heritage Walks", desc: "Guided tours through the old city's hidden gems." },
                Feature { glyph: "★", title: "Cultural Evenings", desc: "Live folk music and Ghoomar dance performances." },
            ],
        }
    }

    pub fn footer_blurb(self) -> &'static str {
        match self {
            Page::Luxe => "Curating the world's most exceptional hotels for the discerning traveler.",
            Page::Ananta => "Be the first to receive updates on seasonal offers, exclusive events, and the stories of Ananta.",
        }
    }

    pub fn footer_columns(self) -> &'static [FooterColumn] {
        match self {
            Page::Luxe => &[
                FooterColumn { title: "Explore", items: &["Destinations", "Hotels", "Offers"] },
                FooterColumn { title: "Contact", items: &["support@luxestay.com", "+1 (555) 123-4567"] },
            ],
            Page::Ananta => &[
                FooterColumn {
                    title: "Address",
                    items: &["Lake Pichola, The Oberoi Rd,", "Udaipur, Rajasthan", "India 313001"],
                },
                FooterColumn { title: "Contact", items: &["+91 97373 15326", "patelanil311@gmail.com"] },
                FooterColumn {
                    title: "Explore",
                    items: &["Suites & Havelis", "Royal Dining", "Jiva Spa", "Curated Experiences"],
                },
                FooterColumn {
                    title: "About Us",
                    items: &["Our History", "The Mewar Legacy", "Awards & Recognition", "Sustainability", "Careers"],
                },
                FooterColumn {
                    title: "Legal",
                    items: &["Privacy Policy", "Terms & Conditions", "Cookie Policy", "Sitemap"],
                },
            ],
        }
    }

    pub fn copyright(self) -> &'static str {
        match self {
            Page::Luxe => "© 2024 LuxeStay Inc. All rights reserved.",
            Page::Ananta => "© 2026 Ananta Heritage. All Rights Reserved.",
        }
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown page `{s}` (expected luxe or ananta)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parses_case_insensitively() {
        assert_eq!("Ananta".parse::<Page>(), Ok(Page::Ananta));
        assert_eq!("luxe".parse::<Page>(), Ok(Page::Luxe));
        assert!("palace".parse::<Page>().is_err());
    }

    #[test]
    fn only_ananta_has_scroll_effects() {
        assert!(!Page::Luxe.traits().progress_bar);
        assert!(Page::Ananta.traits().progress_bar);
        assert!(Page::Ananta.traits().parallax_hero);
        assert!(Page::Luxe.traits().solid_nav_when_menu_open);
    }

    #[test]
    fn ananta_intro_is_sequenced() {
        let t = Page::Ananta.timings();
        assert!(t.eyebrow.delay < t.title.delay);
        assert!(t.title.delay < t.subtitle.delay);
        assert!(t.subtitle.delay < t.search.delay);
    }

    #[test]
    fn zero_speed_disables_entrance() {
        let t = Page::Ananta.timings().scaled(0.0);
        assert_eq!(t.search.delay, Duration::ZERO);
        assert_eq!(t.search.duration, Duration::ZERO);
    }

    #[test]
    fn tiny_speed_saturates_instead_of_overflowing() {
        let t = Page::Ananta.timings().scaled(1e-30);
        assert_eq!(t.search.delay, Duration::MAX);
        assert_eq!(t.card_stagger, Duration::MAX);
        assert_eq!(t.search.progress(Duration::from_secs(3_600)), 0.0);
    }

    #[test]
    fn doubling_speed_halves_delays() {
        let t = Page::Ananta.timings().scaled(2.0);
        let diff = t.title.delay.abs_diff(Duration::from_millis(1_200));
        assert!(diff < Duration::from_micros(1));
    }
}
