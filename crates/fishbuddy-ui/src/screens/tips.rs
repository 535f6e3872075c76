//! Static fishing advice, grouped by season and by method.

/// One tappable tip box and the text of its popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub name: &'static str,
    pub content: &'static str,
}

pub static SEASONS: [Tip; 4] = [
    Tip {
        name: "Spring 🌸",
        content: "Spring fishing tips: Fish tend to be active in shallow waters. Use brightly colored lures.",
    },
    Tip {
        name: "Summer ☀️",
        content: "Summer fishing tips: Early morning and evening are the best times. Try topwater baits.",
    },
    Tip {
        name: "Fall 🍂",
        content: "Fall fishing tips: Fish move to deeper waters; crankbaits are effective.",
    },
    Tip {
        name: "Winter ❄️",
        content: "Winter fishing tips: Focus on slow-moving baits as fish are less active.",
    },
];

pub static METHODS: [Tip; 4] = [
    Tip {
        name: "Casting 🎣",
        content: "Casting tips: Focus on accurate casting near structures. Vary your retrieve speed.",
    },
    Tip {
        name: "Jigging 🪝",
        content: "Jigging tips: Use vertical motion to mimic injured baitfish. Ideal for deep-water fishing.",
    },
    Tip {
        name: "Ice Fishing 🧊",
        content: "Ice fishing tips: Use small jigs and live bait. Drill multiple holes to find active fish.",
    },
    Tip {
        name: "Trolling 🚤",
        content: "Trolling tips: Use crankbaits or spoons. Adjust your speed to match fish activity.",
    },
];

impl Tip {
    /// Name without the trailing emoji, lowercased, for lookups
    pub fn key(&self) -> String {
        self.name
            .chars()
            .filter(|c| c.is_ascii())
            .collect::<String>()
            .trim()
            .to_lowercase()
    }
}

fn find(tips: &[Tip], name: &str) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    tips.iter().position(|t| t.key() == wanted)
}

/// Tips screen: at most one season popup and one method popup open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipsScreen {
    selected_season: Option<usize>,
    selected_method: Option<usize>,
}

impl TipsScreen {
    pub const TITLE: &'static str = "Fishing Tips";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn seasons(&self) -> &'static [Tip] {
        &SEASONS
    }

    pub fn methods(&self) -> &'static [Tip] {
        &METHODS
    }

    /// Open the popup for a season box. Unknown indices are ignored.
    pub fn select_season(&mut self, index: usize) {
        if index < SEASONS.len() {
            self.selected_season = Some(index);
        }
    }

    /// Open the popup for a method box. Unknown indices are ignored.
    pub fn select_method(&mut self, index: usize) {
        if index < METHODS.len() {
            self.selected_method = Some(index);
        }
    }

    /// Select a season by name (case-insensitive, emoji optional)
    pub fn select_season_named(&mut self, name: &str) -> bool {
        match find(&SEASONS, name) {
            Some(i) => {
                self.select_season(i);
                true
            }
            None => false,
        }
    }

    /// Select a method by name (case-insensitive, emoji optional)
    pub fn select_method_named(&mut self, name: &str) -> bool {
        match find(&METHODS, name) {
            Some(i) => {
                self.select_method(i);
                true
            }
            None => false,
        }
    }

    pub fn close_season(&mut self) {
        self.selected_season = None;
    }

    pub fn close_method(&mut self) {
        self.selected_method = None;
    }

    pub fn season_popup(&self) -> Option<&'static Tip> {
        self.selected_season.map(|i| &SEASONS[i])
    }

    pub fn method_popup(&self) -> Option<&'static Tip> {
        self.selected_method.map(|i| &METHODS[i])
    }
}
