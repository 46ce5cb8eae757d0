//! Fixed copy and figures shown by the landing page sections.

pub const BRAND: &str = "CLUE AI";

pub const HEADLINE: [&str; 3] = ["Simulating", "Worlds For", "Better Marketing"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
	pub glyph: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
	Feature {
		glyph: "👥",
		title: "Realistic Personas",
		description: "Built to think and feel like your customers",
	},
	Feature {
		glyph: "⚡",
		title: "Instant Simulations",
		description: "Test campaigns in minutes, not months",
	},
	Feature {
		glyph: "📈",
		title: "Actionable Insights",
		description: "Reactions, sentiment, and strategy in one place",
	},
];

/// Marker shown next to a reaction's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
	Emoji(&'static str),
	LinkedIn,
	X,
}

/// A reaction bubble placed by percentage of the demo area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reaction {
	pub text: &'static str,
	pub x: u8,
	pub y: u8,
	pub badge: Badge,
}

pub const REACTIONS: [Reaction; 7] = [
	Reaction { text: "Wow!", x: 20, y: 15, badge: Badge::Emoji("😍") },
	Reaction { text: "This is amazing", x: 70, y: 20, badge: Badge::LinkedIn },
	Reaction { text: "Perfect!", x: 25, y: 65, badge: Badge::Emoji("🔥") },
	Reaction { text: "Well done!", x: 75, y: 70, badge: Badge::X },
	Reaction { text: "Love it!", x: 50, y: 40, badge: Badge::Emoji("👏") },
	Reaction { text: "Incredible", x: 15, y: 40, badge: Badge::LinkedIn },
	Reaction { text: "Amazing work", x: 85, y: 45, badge: Badge::X },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactScore {
	pub label: &'static str,
	pub value: u8,
	pub color: &'static str,
}

impl ImpactScore {
	pub fn percent(&self) -> String {
		format!("{}%", self.value)
	}
}

pub const IMPACT_SCORES: [ImpactScore; 3] = [
	ImpactScore { label: "Positive", value: 87, color: "#10b981" },
	ImpactScore { label: "Negative", value: 87, color: "#ef4444" },
	ImpactScore { label: "Ignored", value: 87, color: "#6b7280" },
];

/// One arc of the large sentiment donut, as a share of the full circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSegment {
	pub color: &'static str,
	pub share: f64,
}

pub const DONUT: [DonutSegment; 3] = [
	DonutSegment { color: "#10b981", share: 0.6 },
	DonutSegment { color: "#ef4444", share: 0.2 },
	DonutSegment { color: "#6b7280", share: 0.2 },
];

pub const DONUT_LABEL: &str = "87%";

pub const SUMMARY_POINTS: [&str; 5] = [
	"Highly resonant with commuters in urban areas",
	"Positive sentiment around reliability messaging",
	"Minor concerns about pricing mentioned",
	"Strong brand recall in key demographics",
	"Recommendation: Emphasize convenience in final cut",
];

pub const FILTERS: [&str; 3] = ["All Campaigns", "Data Range", "Sentiment"];

pub const CURRENT_CAMPAIGN: &str = "Uber Ride";

pub const CAMPAIGN_TITLE: &str = "Uber - \"You're Almost There\" Campaign";

pub const CAMPAIGN_DESCRIPTION: &str = "This campaign focuses on the final moments of a rider's \
	journey, when anticipation peaks. The message highlights Uber's reliability during those \
	crucial last few minutes, emphasizing punctuality and trust. The creative showcases diverse \
	urban settings with riders checking their phones, seeing \"You're Almost There\" \
	notifications. The tone is reassuring yet exciting, targeting commuters who value time \
	efficiency. Initial testing shows strong resonance with professional demographics aged 25-45 \
	in metropolitan areas. The campaign leverages real-time tracking as a key differentiator, \
	positioning Uber as the dependable choice for time-conscious users.";

pub const SIDEBAR_MENU: [&str; 3] = ["Product Guide", "Settings", "Log Out"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Case {
	pub title: &'static str,
	pub description: &'static str,
}

pub const CASES: [Case; 5] = [
	Case {
		title: "Branding",
		description: "Test if your brand story truly connects with your audience.",
	},
	Case {
		title: "Advertising",
		description: "Run A/B simulations on ad creatives, copy, and visuals.",
	},
	Case {
		title: "Public Relations",
		description: "Forecast reactions to press releases or sensitive announcements.",
	},
	Case {
		title: "Product Launches",
		description: "See how your market will respond before you go live.",
	},
	Case {
		title: "Social Media Campaigns",
		description: "Test memes, taglines, and engagement strategies with real persona reactions.",
	},
];
