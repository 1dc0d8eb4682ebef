//! Canned guidance keyed by the root number (mulank).
//!
//! Every table here is authored content; nothing is computed from the digit
//! beyond picking the row.

use crate::model::advice::{
    Directions, FavourableColors, FavourableDays, Health, MarriedLife, Music, Professions, Remedies,
    Talisman, UniversalEnergies,
};
use crate::model::user::Gender;

struct RootProfile {
    partner_numbers: &'static [u32],
    partner_type: &'static str,
    marriage_outlook: &'static str,
    marriage_tips: [&'static str; 3],
    health_tendency: &'static str,
    health_suggestions: [&'static str; 3],
    primary_professions: &'static [&'static str],
    secondary_professions: &'static [&'static str],
    best_days: [&'static str; 3],
    decision_day: &'static str,
    beginning_day: &'static str,
    primary_colors: &'static [&'static str],
    secondary_colors: &'static [&'static str],
    avoid_colors: &'static [&'static str],
    music: &'static [&'static str],
    frequencies: &'static [&'static str],
    avoid_music: &'static [&'static str],
    sleeping: &'static str,
    working: &'static str,
    meditation: &'static str,
}

struct TalismanEntry {
    name: &'static str,
    benefits: [&'static str; 5],
    instructions: &'static str,
}

const ROOT_PROFILES: [RootProfile; 9] = [
    RootProfile {
        partner_numbers: &[1, 5, 7],
        partner_type: "confident, ambitious partner who respects your independence",
        marriage_outlook: "Your married life will be dynamic with strong leadership from both partners",
        marriage_tips: ["Maintain mutual respect for independence", "Take turns in leadership roles", "Support each other's ambitions"],
        health_tendency: "Generally robust health with focus on heart and circulation",
        health_suggestions: ["Regular cardiovascular exercise", "Avoid excessive stress", "Maintain regular sleep schedule"],
        primary_professions: &["Leadership roles", "Entrepreneurship", "Government positions", "Executive positions"],
        secondary_professions: &["Sports Leadership", "Politics", "Independent Consulting", "Innovation Management"],
        best_days: ["Sunday", "Monday", "Tuesday"],
        decision_day: "Sunday",
        beginning_day: "Sunday",
        primary_colors: &["Gold", "Orange", "Red"],
        secondary_colors: &["Yellow", "Maroon"],
        avoid_colors: &["Black", "Dark Blue"],
        music: &["Classical", "Motivational", "Upbeat"],
        frequencies: &["528 Hz", "741 Hz"],
        avoid_music: &["Heavy metal", "Aggressive music"],
        sleeping: "South or East",
        working: "East or North",
        meditation: "East",
    },
    RootProfile {
        partner_numbers: &[2, 4, 6, 8],
        partner_type: "caring, supportive partner who values emotional connection",
        marriage_outlook: "Your married life will be harmonious with deep emotional bonds",
        marriage_tips: ["Practice open communication", "Show appreciation for small gestures", "Create peaceful home environment"],
        health_tendency: "Sensitive constitution requiring attention to digestive system",
        health_suggestions: ["Eat regular balanced meals", "Practice stress management", "Avoid cold environments"],
        primary_professions: &["Counseling", "Diplomacy", "Healthcare", "Team coordination"],
        secondary_professions: &["Customer Service", "Partnership Roles", "Mediation", "Team Coordination"],
        best_days: ["Monday", "Tuesday", "Friday"],
        decision_day: "Monday",
        beginning_day: "Monday",
        primary_colors: &["White", "Silver", "Light Blue"],
        secondary_colors: &["Green", "Cream"],
        avoid_colors: &["Red", "Dark colors"],
        music: &["Soft instrumental", "Romantic", "Ambient"],
        frequencies: &["432 Hz", "528 Hz"],
        avoid_music: &["Loud music", "Aggressive beats"],
        sleeping: "North or West",
        working: "North or West",
        meditation: "North",
    },
    RootProfile {
        partner_numbers: &[3, 6, 9],
        partner_type: "creative, communicative partner who enjoys social activities",
        marriage_outlook: "Your married life will be joyful with excellent communication",
        marriage_tips: ["Keep communication channels open", "Engage in creative activities together", "Maintain social connections"],
        health_tendency: "Good vitality with attention needed for nervous system",
        health_suggestions: ["Regular mental relaxation", "Maintain active social life", "Practice deep breathing"],
        primary_professions: &["Communication", "Media and Entertainment", "Teaching", "Creative Arts"],
        secondary_professions: &["Marketing/Advertising", "Public Relations", "Design", "Broadcasting"],
        best_days: ["Thursday", "Tuesday", "Friday"],
        decision_day: "Thursday",
        beginning_day: "Thursday",
        primary_colors: &["Yellow", "Golden", "Purple"],
        secondary_colors: &["Orange", "Light Blue"],
        avoid_colors: &["Black", "Dark Green"],
        music: &["Pop", "Jazz", "World music"],
        frequencies: &["417 Hz", "528 Hz"],
        avoid_music: &["Dark music", "Depressing songs"],
        sleeping: "East or South",
        working: "North or East",
        meditation: "North-East",
    },
    RootProfile {
        partner_numbers: &[2, 4, 6, 8],
        partner_type: "practical, reliable partner who shares your values of stability",
        marriage_outlook: "Your married life will be stable and built on solid foundations",
        marriage_tips: ["Build traditions together", "Plan for the future systematically", "Value stability over excitement"],
        health_tendency: "Strong constitution but watch for bone and joint issues",
        health_suggestions: ["Regular physical exercise", "Maintain consistent routine", "Include calcium-rich foods"],
        primary_professions: &["Engineering", "Construction", "Banking", "Administrative roles"],
        secondary_professions: &["Project Management", "Real Estate", "Manufacturing", "Systems Analysis"],
        best_days: ["Sunday", "Monday", "Saturday"],
        decision_day: "Saturday",
        beginning_day: "Sunday",
        primary_colors: &["Blue", "Grey", "Brown"],
        secondary_colors: &["Green", "Khaki"],
        avoid_colors: &["Red", "Pink"],
        music: &["Folk", "Country", "Traditional"],
        frequencies: &["396 Hz", "528 Hz"],
        avoid_music: &["Chaotic music", "Experimental"],
        sleeping: "South or West",
        working: "South or East",
        meditation: "South",
    },
    RootProfile {
        partner_numbers: &[1, 5, 7, 9],
        partner_type: "adventurous, free-spirited partner who enjoys variety and travel",
        marriage_outlook: "Your married life will be exciting with plenty of adventures together",
        marriage_tips: ["Give each other space for growth", "Plan exciting adventures", "Embrace change as opportunity"],
        health_tendency: "Dynamic health but prone to nervous exhaustion",
        health_suggestions: ["Balance activity with rest", "Practice meditation", "Maintain exercise variety"],
        primary_professions: &["Travel and Tourism", "Sales and Marketing", "Adventure sports", "Consulting"],
        secondary_professions: &["Marketing", "Public Relations", "Event Management", "Transportation"],
        best_days: ["Wednesday", "Friday", "Saturday"],
        decision_day: "Wednesday",
        beginning_day: "Wednesday",
        primary_colors: &["Green", "Light Colors", "Silver"],
        secondary_colors: &["White", "Grey"],
        avoid_colors: &["Dark Blue", "Black"],
        music: &["Rock", "Electronic", "Dance"],
        frequencies: &["741 Hz", "852 Hz"],
        avoid_music: &["Monotonous music", "Slow ballads"],
        sleeping: "North or East",
        working: "North or West",
        meditation: "North",
    },
    RootProfile {
        partner_numbers: &[2, 3, 6, 9],
        partner_type: "family-oriented, nurturing partner who values home and relationships",
        marriage_outlook: "Your married life will be loving with strong family focus",
        marriage_tips: ["Prioritize family time", "Create comfortable home", "Show love through service"],
        health_tendency: "Generally good health with focus on reproductive system",
        health_suggestions: ["Focus on emotional well-being", "Regular health check-ups", "Maintain work-life balance"],
        primary_professions: &["Healthcare", "Education", "Interior Design", "Social Work"],
        secondary_professions: &["Hospitality", "Counseling", "Child Care", "Community Service"],
        best_days: ["Friday", "Tuesday", "Thursday"],
        decision_day: "Friday",
        beginning_day: "Friday",
        primary_colors: &["Pink", "Blue", "White"],
        secondary_colors: &["Light Green", "Cream"],
        avoid_colors: &["Red", "Black"],
        music: &["Romantic", "Family songs", "Devotional"],
        frequencies: &["528 Hz", "639 Hz"],
        avoid_music: &["Angry music", "Violent lyrics"],
        sleeping: "South or West",
        working: "North or South",
        meditation: "South-East",
    },
    RootProfile {
        partner_numbers: &[1, 5, 7, 9],
        partner_type: "intellectual, spiritual partner who appreciates deep conversations",
        marriage_outlook: "Your married life will be spiritually fulfilling with deep understanding",
        marriage_tips: ["Respect need for solitude", "Engage in spiritual practices", "Have meaningful conversations"],
        health_tendency: "Need to balance mental and physical health",
        health_suggestions: ["Regular meditation", "Spend time in nature", "Balance solitude with social interaction"],
        primary_professions: &["Research and Development", "Spirituality", "Psychology", "Investigation"],
        secondary_professions: &["Psychology", "Archaeology", "Philosophy", "Scientific Research"],
        best_days: ["Monday", "Tuesday", "Sunday"],
        decision_day: "Monday",
        beginning_day: "Sunday",
        primary_colors: &["Light Blue", "Green", "White"],
        secondary_colors: &["Silver", "Grey"],
        avoid_colors: &["Red", "Dark colors"],
        music: &["Meditation music", "Spiritual", "Nature sounds"],
        frequencies: &["963 Hz", "852 Hz"],
        avoid_music: &["Commercial pop", "Materialistic songs"],
        sleeping: "West or South",
        working: "West or South",
        meditation: "West",
    },
    RootProfile {
        partner_numbers: &[2, 4, 6, 8],
        partner_type: "successful, ambitious partner who understands your drive for achievement",
        marriage_outlook: "Your married life will be successful with mutual support for ambitions",
        marriage_tips: ["Support career goals", "Manage finances wisely", "Celebrate achievements together"],
        health_tendency: "Strong physical constitution but watch for stress-related issues",
        health_suggestions: ["Manage work stress", "Regular health check-ups", "Practice relaxation techniques"],
        primary_professions: &["Business Management", "Finance", "Real Estate", "Corporate Leadership"],
        secondary_professions: &["Manufacturing", "Politics", "Management Consulting", "International Trade"],
        best_days: ["Saturday", "Sunday", "Tuesday"],
        decision_day: "Saturday",
        beginning_day: "Saturday",
        primary_colors: &["Dark Blue", "Black", "Purple"],
        secondary_colors: &["Grey", "Brown"],
        avoid_colors: &["Light colors", "Pink"],
        music: &["Classical", "Power music", "Corporate"],
        frequencies: &["528 Hz", "741 Hz"],
        avoid_music: &["Soft music", "Emotional ballads"],
        sleeping: "South or West",
        working: "South or West",
        meditation: "South-West",
    },
    RootProfile {
        partner_numbers: &[1, 3, 5, 6, 7, 9],
        partner_type: "compassionate, humanitarian partner who shares your desire to help others",
        marriage_outlook: "Your married life will be compassionate with shared humanitarian goals",
        marriage_tips: ["Engage in charitable activities", "Practice forgiveness", "Support personal growth"],
        health_tendency: "Good overall health with attention to blood circulation",
        health_suggestions: ["Regular circulation exercises", "Maintain emotional balance", "Engage in charitable activities"],
        primary_professions: &["Social Service", "Humanitarian Work", "Counseling", "Healing Arts"],
        secondary_professions: &["International Relations", "Environmental Work", "Spiritual Teaching", "Global Business"],
        best_days: ["Tuesday", "Thursday", "Sunday"],
        decision_day: "Tuesday",
        beginning_day: "Sunday",
        primary_colors: &["Red", "Maroon", "Pink"],
        secondary_colors: &["Orange", "Yellow"],
        avoid_colors: &["Blue", "Black"],
        music: &["Devotional", "Humanitarian", "World music"],
        frequencies: &["528 Hz", "396 Hz"],
        avoid_music: &["Selfish themes", "Materialistic music"],
        sleeping: "South or East",
        working: "South or East",
        meditation: "South",
    },
];

/// Used when the root number falls outside 1..=9.
const FALLBACK_PROFILE: RootProfile = RootProfile {
    partner_numbers: &[1, 5, 7],
    partner_type: "understanding and supportive partner",
    marriage_outlook: "Your married life will be balanced and fulfilling",
    marriage_tips: ["Practice patience and understanding", "Communicate openly", "Support each other's dreams"],
    health_tendency: "Balanced health with attention to lifestyle",
    health_suggestions: ["Regular exercise and balanced diet", "Adequate rest", "Regular health check-ups"],
    primary_professions: &["Versatile career options", "Leadership roles", "Creative fields"],
    secondary_professions: &["Sports Leadership", "Politics", "Independent Consulting", "Innovation Management"],
    best_days: ["Sunday", "Tuesday", "Thursday"],
    decision_day: "Sunday",
    beginning_day: "Sunday",
    primary_colors: &["White", "Light Blue", "Green"],
    secondary_colors: &["Yellow", "Silver"],
    avoid_colors: &["Black", "Dark Red"],
    music: &["Classical", "Peaceful", "Uplifting"],
    frequencies: &["528 Hz", "432 Hz"],
    avoid_music: &["Aggressive", "Negative lyrics"],
    sleeping: "South or East",
    working: "North or East",
    meditation: "North-East",
};

const TALISMANS: [TalismanEntry; 9] = [
    TalismanEntry {
        name: "1 Mukhi Rudraksha",
        benefits: ["Enhances leadership qualities", "Brings clarity of thought", "Removes ego and pride", "Connects with divine consciousness", "Improves concentration"],
        instructions: "Wear on Monday after proper energization. Can be worn as pendant or bracelet.",
    },
    TalismanEntry {
        name: "2 Mukhi Rudraksha",
        benefits: ["Improves relationships", "Enhances emotional balance", "Brings harmony in partnerships", "Develops patience", "Strengthens family bonds"],
        instructions: "Wear on Monday after chanting Om Namah Shivaya 108 times.",
    },
    TalismanEntry {
        name: "3 Mukhi Rudraksha",
        benefits: ["Enhances communication skills", "Boosts creativity", "Improves self-confidence", "Removes past karma", "Brings success in education"],
        instructions: "Wear on Tuesday or Thursday after proper purification rituals.",
    },
    TalismanEntry {
        name: "4 Mukhi Rudraksha",
        benefits: ["Enhances knowledge and wisdom", "Improves memory power", "Brings stability in life", "Helps in decision making", "Develops organizational skills"],
        instructions: "Wear on Sunday or Thursday after energizing with Brahma mantra.",
    },
    TalismanEntry {
        name: "5 Mukhi Rudraksha",
        benefits: ["Brings overall well-being", "Enhances spiritual growth", "Improves health", "Removes negative energy", "Brings peace of mind"],
        instructions: "Can be worn daily. Most commonly used Rudraksha with powerful benefits.",
    },
    TalismanEntry {
        name: "6 Mukhi Rudraksha",
        benefits: ["Enhances artistic abilities", "Improves relationships", "Brings luxury and comfort", "Develops emotional intelligence", "Attracts love and affection"],
        instructions: "Wear on Friday after offering prayers to Goddess Lakshmi.",
    },
    TalismanEntry {
        name: "7 Mukhi Rudraksha",
        benefits: ["Enhances spiritual powers", "Improves intuition", "Brings good fortune", "Removes obstacles", "Develops analytical abilities"],
        instructions: "Wear on Saturday after energizing with Maa Lakshmi mantra.",
    },
    TalismanEntry {
        name: "8 Mukhi Rudraksha",
        benefits: ["Removes obstacles", "Brings success in business", "Enhances leadership qualities", "Improves analytical thinking", "Brings material prosperity"],
        instructions: "Wear on Saturday or Tuesday after proper Ganesha puja.",
    },
    TalismanEntry {
        name: "9 Mukhi Rudraksha",
        benefits: ["Enhances spiritual energy", "Brings courage and confidence", "Improves determination", "Develops humanitarian qualities", "Brings divine blessings"],
        instructions: "Wear on Tuesday after chanting Nav Durga mantras.",
    },
];

const GENERAL_REMEDIES: [&str; 5] = [
    "Chant your personal mantra daily for 108 times",
    "Wear gemstones corresponding to your favorable numbers",
    "Donate to charity on favorable days of the week",
    "Practice meditation during favorable hours",
    "Keep your living space clean and organized",
];

const BALANCING_REMEDIES: [&str; 3] = [
    "Perform Sun Salutation (Surya Namaskar) daily",
    "Light a lamp with sesame oil on Saturdays",
    "Recite Hanuman Chalisa for strength and courage",
];

const PRAYERS: [&str; 3] = [
    "Om Gam Ganapataye Namaha - for removing obstacles",
    "Om Namah Shivaya - for spiritual growth",
    "Om Shri Lakshmi Narayanaya Namaha - for prosperity",
];

fn profile(mulank: u32) -> &'static RootProfile {
    match mulank {
        1..=9 => &ROOT_PROFILES[(mulank - 1) as usize],
        _ => &FALLBACK_PROFILE,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn compatible_partner_numbers(mulank: u32) -> Vec<u32> {
    profile(mulank).partner_numbers.to_vec()
}

/// Ideal partner description. The table is the same for every gender.
pub fn ideal_partner_type(mulank: u32, _gender: Gender) -> String {
    profile(mulank).partner_type.to_string()
}

pub fn marriage_outlook(mulank: u32) -> String {
    profile(mulank).marriage_outlook.to_string()
}

pub fn marriage_tips(mulank: u32) -> Vec<String> {
    strings(&profile(mulank).marriage_tips)
}

pub fn health(mulank: u32) -> Health {
    let p = profile(mulank);
    Health {
        tendency: p.health_tendency.to_string(),
        suggestions: strings(&p.health_suggestions),
    }
}

pub fn professions(mulank: u32) -> Professions {
    let p = profile(mulank);
    Professions {
        primary: strings(p.primary_professions),
        secondary: strings(p.secondary_professions),
    }
}

pub fn favourable_days(mulank: u32) -> FavourableDays {
    let p = profile(mulank);
    FavourableDays {
        best: strings(&p.best_days),
        decisions: p.decision_day.to_string(),
        beginnings: p.beginning_day.to_string(),
    }
}

pub fn favourable_colors(mulank: u32) -> FavourableColors {
    let p = profile(mulank);
    FavourableColors {
        primary: strings(p.primary_colors),
        secondary: strings(p.secondary_colors),
        avoid: strings(p.avoid_colors),
    }
}

pub fn music(mulank: u32) -> Music {
    let p = profile(mulank);
    Music {
        recommended: strings(p.music),
        frequencies: strings(p.frequencies),
        avoid: strings(p.avoid_music),
    }
}

pub fn directions(mulank: u32) -> Directions {
    let p = profile(mulank);
    Directions {
        sleeping: p.sleeping.to_string(),
        working: p.working.to_string(),
        meditation: p.meditation.to_string(),
    }
}

pub fn universal_energies(mulank: u32, gender: Gender) -> UniversalEnergies {
    UniversalEnergies {
        married_life: MarriedLife {
            compatible_numbers: compatible_partner_numbers(mulank),
            partner_type: ideal_partner_type(mulank, gender),
            outlook: marriage_outlook(mulank),
            tips: marriage_tips(mulank),
        },
        health: health(mulank),
        profession: professions(mulank),
        favourable_days: favourable_days(mulank),
        favourable_colors: favourable_colors(mulank),
        music: music(mulank),
        directions: directions(mulank),
    }
}

/// Remedies are the same for every reader.
pub fn remedies() -> Remedies {
    Remedies {
        general: strings(&GENERAL_REMEDIES),
        balancing: strings(&BALANCING_REMEDIES),
        prayers: strings(&PRAYERS),
    }
}

/// Rudraksha recommendation. Roots outside 1..=9 get the 5 Mukhi bead, but the
/// label still names the actual root.
pub fn talisman(mulank: u32) -> Talisman {
    let entry = match mulank {
        1..=9 => &TALISMANS[(mulank - 1) as usize],
        _ => &TALISMANS[4],
    };
    Talisman {
        recommendation: format!("{} (based on your Mulank {})", entry.name, mulank),
        benefits: strings(&entry.benefits),
        instructions: entry.instructions.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_root_has_complete_content() {
        for mulank in 1..=9 {
            let energies = universal_energies(mulank, Gender::Female);
            assert!(!energies.married_life.compatible_numbers.is_empty());
            assert_eq!(energies.married_life.tips.len(), 3);
            assert_eq!(energies.health.suggestions.len(), 3);
            assert_eq!(energies.profession.primary.len(), 4);
            assert_eq!(energies.profession.secondary.len(), 4);
            assert_eq!(energies.favourable_days.best.len(), 3);
            assert_eq!(energies.music.frequencies.len(), 2);
            assert_eq!(talisman(mulank).benefits.len(), 5);
        }
    }

    #[test]
    fn test_root_six() {
        assert_eq!(compatible_partner_numbers(6), vec![2, 3, 6, 9]);
        assert_eq!(
            marriage_outlook(6),
            "Your married life will be loving with strong family focus"
        );
        let days = favourable_days(6);
        assert_eq!(days.best, vec!["Friday", "Tuesday", "Thursday"]);
        assert_eq!(days.decisions, "Friday");
        assert_eq!(directions(6).meditation, "South-East");
        assert_eq!(favourable_colors(6).avoid, vec!["Red", "Black"]);
    }

    #[test]
    fn test_root_nine_partner_numbers() {
        assert_eq!(compatible_partner_numbers(9), vec![1, 3, 5, 6, 7, 9]);
        assert_eq!(music(9).frequencies, vec!["528 Hz", "396 Hz"]);
    }

    #[test]
    fn test_partner_type_ignores_gender() {
        assert_eq!(ideal_partner_type(3, Gender::Male), ideal_partner_type(3, Gender::Other));
    }

    #[test]
    fn test_fallback_for_out_of_range_root() {
        assert_eq!(compatible_partner_numbers(0), vec![1, 5, 7]);
        assert_eq!(marriage_outlook(0), "Your married life will be balanced and fulfilling");
        assert_eq!(
            professions(0).primary,
            vec!["Versatile career options", "Leadership roles", "Creative fields"]
        );
        assert_eq!(directions(12).meditation, "North-East");
    }

    #[test]
    fn test_talisman() {
        let t = talisman(3);
        assert_eq!(t.recommendation, "3 Mukhi Rudraksha (based on your Mulank 3)");
        assert_eq!(t.instructions, "Wear on Tuesday or Thursday after proper purification rituals.");

        let t = talisman(0);
        assert_eq!(t.recommendation, "5 Mukhi Rudraksha (based on your Mulank 0)");
    }

    #[test]
    fn test_remedies() {
        let r = remedies();
        assert_eq!(r.general.len(), 5);
        assert_eq!(r.balancing.len(), 3);
        assert_eq!(r.prayers[1], "Om Namah Shivaya - for spiritual growth");
    }
}
