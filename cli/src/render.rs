use chrono::Local;
use numerology_core::model::analysis::{CompatibilityAssessment, GridAnalysis};
use numerology_core::model::numbers::{Calculations, CoreNumbers};
use numerology_core::{GridFlavor, ReportData};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use unicode_width::UnicodeWidthStr;

#[derive(Tabled)]
struct NumberRow {
    #[tabled(rename = "Number")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Calculation")]
    calculation: String,
}

#[derive(Tabled)]
struct CompatibilityRow {
    #[tabled(rename = "Pairing")]
    pairing: &'static str,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Meaning")]
    description: String,
}

#[derive(Tabled)]
struct YogRow {
    #[tabled(rename = "Pair")]
    combination: String,
    #[tabled(rename = "Planets")]
    planets: String,
    #[tabled(rename = "Effects")]
    effects: String,
}

#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "Digit")]
    digit: u32,
    #[tabled(rename = "Positions")]
    positions: String,
    #[tabled(rename = "Life Area")]
    life_area: String,
    #[tabled(rename = "Effects")]
    effects: String,
}

#[derive(Tabled)]
struct DashaRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "PYR")]
    pyr: u32,
    #[tabled(rename = "PMO")]
    pmo: u32,
    #[tabled(rename = "MDA")]
    mda: u32,
    #[tabled(rename = "ADA")]
    ada: u32,
    #[tabled(rename = "Sum")]
    summation: u32,
    #[tabled(rename = "Interpretation")]
    interpretation: String,
}

#[derive(Tabled)]
struct LuckyRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Number")]
    number: u32,
    #[tabled(rename = "Effect")]
    effect: String,
}

fn styled(mut table: Table, color: bool) -> Table {
    table.with(Style::modern());
    if color {
        table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    }
    table
}

fn heading(title: &str, color: bool) {
    if color {
        println!("\n\x1b[1;36m{}\x1b[0m", title);
    } else {
        println!("\n{}", title);
    }
}

/// Aligns `label: value` lines on the widest label.
pub fn kv_lines(pairs: &[(&str, String)]) -> Vec<String> {
    let width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(k, v)| format!("{}{}  {}", k, " ".repeat(width - k.width()), v))
        .collect()
}

/// Three text rows of the grid, `.` for empty cells.
pub fn grid_lines(analysis: &GridAnalysis) -> Vec<String> {
    analysis
        .grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(|d| d.to_string()).unwrap_or_else(|| ".".to_string()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn grid_summary(analysis: &GridAnalysis) -> Vec<String> {
    let repeating = analysis
        .repeating_numbers
        .iter()
        .map(|r| format!("{}×{}", r.number, r.count))
        .collect::<Vec<_>>()
        .join(", ");
    kv_lines(&[
        ("Missing", join(&analysis.missing_numbers)),
        ("Repeating", if repeating.is_empty() { "-".to_string() } else { repeating }),
        ("Presence", format!("{}%", analysis.yog_presence)),
        ("Effects", analysis.effects.clone()),
    ])
}

pub fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn stars(count: u32) -> String {
    format!("{}{}", "★".repeat(count as usize), "☆".repeat(5 - count.min(5) as usize))
}

fn grid_table(analysis: &GridAnalysis, color: bool) -> Table {
    let mut builder = Builder::default();
    for line in grid_lines(analysis) {
        builder.push_record(line.split(' ').map(str::to_string));
    }
    let mut table = builder.build();
    table.with(Style::modern());
    if color {
        table.with(Modify::new(Rows::new(..)).with(Color::FG_YELLOW));
    }
    table
}

pub fn numbers_table(numbers: &CoreNumbers, calculations: &Calculations, color: bool) -> Table {
    let rows = vec![
        NumberRow {
            label: "Mulank",
            value: numbers.mulank.to_string(),
            calculation: calculations.mulank_calc.clone(),
        },
        NumberRow {
            label: "Bhagyank",
            value: numbers.bhagyank.to_string(),
            calculation: calculations.bhagyank_calc.clone(),
        },
        NumberRow {
            label: "Name Number",
            value: format!("{} ({})", numbers.name_number.reduced, numbers.name_number.compound),
            calculation: calculations.name_calc.clone(),
        },
        NumberRow {
            label: "Mobile Ank",
            value: numbers.mobile_ank.to_string(),
            calculation: calculations.mobile_calc.clone(),
        },
    ];
    styled(Table::new(rows), color)
}

fn compatibility_row(pairing: &'static str, c: &CompatibilityAssessment) -> CompatibilityRow {
    CompatibilityRow {
        pairing,
        rating: c.rating.to_string(),
        description: c.description.clone(),
    }
}

pub fn print_numbers(report: &ReportData, color: bool) {
    println!("{}", numbers_table(&report.core_numbers, &report.calculations, color));
}

pub fn print_grid(analysis: &GridAnalysis, flavor: GridFlavor, color: bool) {
    heading(&format!("{} Grid", flavor.name()), color);
    println!("{}", grid_table(analysis, color));
    for line in grid_summary(analysis) {
        println!("{}", line);
    }
}

pub fn print_report(report: &ReportData, color: bool) {
    let input = &report.user_input;
    heading(&format!("Numerology Report for {}", input.full_name), color);
    let mut details = vec![
        ("Date of Birth", input.date_of_birth.clone()),
        ("Mobile", input.mobile_number.clone()),
        ("Gender", input.gender.to_string()),
    ];
    if let Some(time) = &input.time_of_birth {
        details.push(("Time of Birth", time.clone()));
    }
    details.push(("Generated on", Local::now().format("%d %B %Y").to_string()));
    for line in kv_lines(&details) {
        println!("{}", line);
    }

    heading("Core Numbers", color);
    print_numbers(report, color);

    heading("Compatibility", color);
    let c = &report.compatibility;
    let rows = vec![
        compatibility_row("Name ↔ Mulank", &c.name_compatibility),
        compatibility_row("Mobile ↔ Mulank", &c.mobile_compatibility),
    ];
    println!("{}", styled(Table::new(rows), color));
    println!("Name suggestions:   {}", c.name_suggestions.join(", "));
    println!("Mobile suggestions: {}", c.mobile_suggestions.join(", "));

    heading("Mobile Yogs", color);
    if report.yog_analysis.is_empty() {
        println!("No named combinations found.");
    } else {
        let rows: Vec<YogRow> = report
            .yog_analysis
            .iter()
            .map(|y| YogRow {
                combination: y.combination.clone(),
                planets: y.planets.clone(),
                effects: y.effects.clone(),
            })
            .collect();
        println!("{}", styled(Table::new(rows), color));
    }

    heading("Digit Positions", color);
    let rows: Vec<PositionRow> = report
        .position_analysis
        .iter()
        .map(|p| PositionRow {
            digit: p.digit,
            positions: join(&p.positions),
            life_area: p.life_area.clone(),
            effects: p.effects.clone(),
        })
        .collect();
    println!("{}", styled(Table::new(rows), color));
    println!("Digit 0 has no positional effect.");

    heading("Name Numerology", color);
    let table = &report.name_numerology_table;
    for line in name_table_lines(report) {
        println!("{}", line);
    }
    println!(
        "Lucky: {}  Neutral: {}  Unlucky: {}",
        join(&table.lucky_numbers),
        join(&table.neutral_numbers),
        join(&table.unlucky_numbers)
    );

    let grids = &report.grid_analysis;
    heading("Date of Birth", color);
    print_grid(&grids.dob_lo_shu, GridFlavor::LoShu, color);
    print_grid(&grids.dob_vedic, GridFlavor::Vedic, color);
    heading("Mobile Number", color);
    print_grid(&grids.mobile_lo_shu, GridFlavor::LoShu, color);
    print_grid(&grids.mobile_vedic, GridFlavor::Vedic, color);

    heading("Harmony", color);
    for line in harmony_lines(report) {
        println!("{}", line);
    }

    heading("Universal Energies", color);
    for line in energies_lines(report) {
        println!("{}", line);
    }

    heading("Dasha Yog", color);
    let rows: Vec<DashaRow> = report
        .dasha_yog
        .iter()
        .map(|d| DashaRow {
            year: d.year,
            month: d.month_name.clone(),
            pyr: d.pyr,
            pmo: d.pmo,
            mda: d.mda,
            ada: d.ada,
            summation: d.summation,
            interpretation: d.interpretation.clone(),
        })
        .collect();
    println!("{}", styled(Table::new(rows), color));

    heading("Lucky Numbers", color);
    let rows: Vec<LuckyRow> = report
        .lucky_numbers
        .iter()
        .map(|l| LuckyRow {
            year: l.year,
            number: l.number,
            effect: l.effect.clone(),
        })
        .collect();
    println!("{}", styled(Table::new(rows), color));

    heading("Remedies", color);
    for line in remedies_lines(report) {
        println!("{}", line);
    }
}

pub fn name_table_lines(report: &ReportData) -> Vec<String> {
    let table = &report.name_numerology_table;
    let letters = |values: &[numerology_core::model::report::LetterValue]| {
        values
            .iter()
            .map(|l| format!("{}({})", l.letter, l.value))
            .collect::<Vec<_>>()
            .join(" ")
    };
    kv_lines(&[
        ("Full name", letters(&table.full_name)),
        (
            "",
            format!(
                "compound {} → {}",
                table.full_name_numbers.compound, table.full_name_numbers.reduced
            ),
        ),
        ("First name", letters(&table.first_name)),
        (
            "",
            format!(
                "compound {} → {}",
                table.first_name_numbers.compound, table.first_name_numbers.reduced
            ),
        ),
    ])
}

pub fn harmony_lines(report: &ReportData) -> Vec<String> {
    let h = &report.harmony_score;
    let mut lines = vec![
        format!("{}  ({}/4 highly compatible pairings)", stars(h.stars), h.score),
        h.description.clone(),
    ];
    lines.extend(h.suggestions.iter().map(|s| format!("  • {}", s)));
    lines
}

pub fn energies_lines(report: &ReportData) -> Vec<String> {
    let e = &report.universal_energies;
    kv_lines(&[
        ("Partner numbers", join(&e.married_life.compatible_numbers)),
        ("Ideal partner", e.married_life.partner_type.clone()),
        ("Outlook", e.married_life.outlook.clone()),
        ("Marriage tips", e.married_life.tips.join("; ")),
        ("Health", e.health.tendency.clone()),
        ("Health advice", e.health.suggestions.join("; ")),
        ("Professions", e.profession.primary.join(", ")),
        ("Also suited", e.profession.secondary.join(", ")),
        ("Best days", e.favourable_days.best.join(", ")),
        ("Decisions on", e.favourable_days.decisions.clone()),
        ("Beginnings on", e.favourable_days.beginnings.clone()),
        ("Colours", e.favourable_colors.primary.join(", ")),
        ("Also", e.favourable_colors.secondary.join(", ")),
        ("Avoid colours", e.favourable_colors.avoid.join(", ")),
        ("Music", e.music.recommended.join(", ")),
        ("Frequencies", e.music.frequencies.join(", ")),
        ("Avoid music", e.music.avoid.join(", ")),
        ("Sleep facing", e.directions.sleeping.clone()),
        ("Work facing", e.directions.working.clone()),
        ("Meditate facing", e.directions.meditation.clone()),
    ])
}

pub fn remedies_lines(report: &ReportData) -> Vec<String> {
    let r = &report.remedies;
    let t = &report.talisman;
    let mut lines = Vec::new();
    lines.push("General:".to_string());
    lines.extend(r.general.iter().map(|s| format!("  • {}", s)));
    lines.push("Balancing:".to_string());
    lines.extend(r.balancing.iter().map(|s| format!("  • {}", s)));
    lines.push("Prayers:".to_string());
    lines.extend(r.prayers.iter().map(|s| format!("  • {}", s)));
    lines.push(String::new());
    lines.push(format!("Rudraksha: {}", t.recommendation));
    lines.extend(t.benefits.iter().map(|s| format!("  • {}", s)));
    lines.push(t.instructions.clone());
    lines
}
