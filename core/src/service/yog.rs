use std::collections::HashSet;

use tracing::trace;

use crate::model::analysis::YogAnalysis;

struct YogMeaning {
    pair: (u32, u32),
    planets: &'static str,
    effects: &'static str,
}

/// Named adjacent-digit combinations, keyed by the unordered pair (smaller first).
const YOG_MEANINGS: &[YogMeaning] = &[
    YogMeaning { pair: (1, 2), planets: "Sun + Moon", effects: "Leadership with emotional intelligence, creative success" },
    YogMeaning { pair: (1, 3), planets: "Sun + Jupiter", effects: "Powerful leadership, spiritual growth, recognition" },
    YogMeaning { pair: (2, 6), planets: "Moon + Venus", effects: "Artistic abilities, harmonious relationships" },
    YogMeaning { pair: (3, 6), planets: "Jupiter + Venus", effects: "Wealth, luxury, spiritual and material balance" },
    YogMeaning { pair: (4, 8), planets: "Rahu + Saturn", effects: "Challenges leading to growth, delayed success" },
    YogMeaning { pair: (5, 7), planets: "Mercury + Ketu", effects: "Intellectual pursuits, research abilities" },
    YogMeaning { pair: (6, 9), planets: "Venus + Mars", effects: "Creative energy, passionate relationships" },
    YogMeaning { pair: (7, 9), planets: "Ketu + Mars", effects: "Spiritual warrior, overcoming obstacles" },
    YogMeaning { pair: (1, 4), planets: "Sun + Rahu", effects: "Ambitious goals, government connections" },
    YogMeaning { pair: (2, 7), planets: "Moon + Ketu", effects: "Intuitive abilities, spiritual insights" },
    YogMeaning { pair: (3, 9), planets: "Jupiter + Mars", effects: "Dynamic leadership, teaching abilities" },
    YogMeaning { pair: (4, 6), planets: "Rahu + Venus", effects: "Material comforts, artistic success" },
    YogMeaning { pair: (5, 8), planets: "Mercury + Saturn", effects: "Business acumen, analytical skills" },
];

fn lookup(key: (u32, u32)) -> Option<&'static YogMeaning> {
    YOG_MEANINGS.iter().find(|m| m.pair == key)
}

/// Scans adjacent digit pairs left to right and reports each known
/// combination once, in order of first appearance.
///
/// Adjacency is over raw characters: a separator between two digits breaks
/// the pair.
pub fn analyze_mobile_yogs(mobile_number: &str) -> Vec<YogAnalysis> {
    let chars: Vec<Option<u32>> = mobile_number.chars().map(|c| c.to_digit(10)).collect();
    let mut seen = HashSet::new();
    let mut yogs = Vec::new();

    for window in chars.windows(2) {
        let (current, next) = match (window[0], window[1]) {
            (Some(current), Some(next)) => (current, next),
            _ => continue,
        };
        let key = (current.min(next), current.max(next));

        if let Some(meaning) = lookup(key) {
            if seen.insert(key) {
                trace!(current, next, planets = meaning.planets, "yog found");
                yogs.push(YogAnalysis {
                    combination: format!("({},{})", current, next),
                    planets: meaning.planets.to_string(),
                    effects: meaning.effects.to_string(),
                });
            }
        }
    }

    yogs
}
