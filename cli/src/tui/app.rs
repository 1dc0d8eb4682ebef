use numerology_core::{GridFlavor, ReportData};
use ratatui::widgets::ListState;

use crate::render::{
    energies_lines, grid_lines, grid_summary, harmony_lines, join, kv_lines, name_table_lines,
    remedies_lines,
};

pub struct Section {
    pub title: &'static str,
    pub body: Vec<String>,
}

pub struct App {
    pub report: ReportData,
    pub sections: Vec<Section>,
    pub state: ListState,
    pub scroll: u16,
}

impl App {
    pub fn new(report: ReportData) -> App {
        let sections = build_sections(&report);
        let mut state = ListState::default();
        state.select(Some(0));
        App {
            report,
            sections,
            state,
            scroll: 0,
        }
    }

    pub fn selected(&self) -> Option<&Section> {
        self.state.selected().and_then(|i| self.sections.get(i))
    }

    pub fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.sections.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
        self.scroll = 0;
    }

    pub fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(0) | None => self.sections.len().saturating_sub(1),
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        let len = self.selected().map(|s| s.body.len()).unwrap_or(0);
        if (self.scroll as usize) + 1 < len {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn build_sections(report: &ReportData) -> Vec<Section> {
    let c = &report.core_numbers;
    let calc = &report.calculations;
    let compat = &report.compatibility;
    let grids = &report.grid_analysis;

    let mut core = kv_lines(&[
        ("Mulank", c.mulank.to_string()),
        ("Bhagyank", c.bhagyank.to_string()),
        ("Name Number", format!("{} ({})", c.name_number.reduced, c.name_number.compound)),
        ("Mobile Ank", c.mobile_ank.to_string()),
    ]);
    core.push(String::new());
    core.extend([
        calc.mulank_calc.clone(),
        calc.bhagyank_calc.clone(),
        calc.name_calc.clone(),
        calc.mobile_calc.clone(),
    ]);

    let mut compatibility = kv_lines(&[
        ("Name", compat.name_compatibility.rating.to_string()),
        ("", compat.name_compatibility.description.clone()),
        ("Mobile", compat.mobile_compatibility.rating.to_string()),
        ("", compat.mobile_compatibility.description.clone()),
    ]);
    compatibility.push(String::new());
    compatibility.push("Name suggestions:".to_string());
    compatibility.extend(compat.name_suggestions.iter().map(|s| format!("  • {}", s)));
    compatibility.push("Mobile suggestions:".to_string());
    compatibility.extend(compat.mobile_suggestions.iter().map(|s| format!("  • {}", s)));

    let mut yogs: Vec<String> = report
        .yog_analysis
        .iter()
        .flat_map(|y| {
            [
                format!("{}  {}", y.combination, y.planets),
                format!("  {}", y.effects),
            ]
        })
        .collect();
    if yogs.is_empty() {
        yogs.push("No named combinations found.".to_string());
    }

    let positions = report
        .position_analysis
        .iter()
        .flat_map(|p| {
            [
                format!("{} at {}  ({})", p.digit, join(&p.positions), p.life_area),
                format!("  {}", p.effects),
            ]
        })
        .collect();

    let mut grid_body = Vec::new();
    for (label, analysis, flavor) in [
        ("Date of birth", &grids.dob_lo_shu, GridFlavor::LoShu),
        ("Date of birth", &grids.dob_vedic, GridFlavor::Vedic),
        ("Mobile", &grids.mobile_lo_shu, GridFlavor::LoShu),
        ("Mobile", &grids.mobile_vedic, GridFlavor::Vedic),
    ] {
        grid_body.push(format!("{} · {}", label, flavor.name()));
        grid_body.extend(grid_lines(analysis).into_iter().map(|l| format!("  {}", l)));
        grid_body.extend(grid_summary(analysis));
        grid_body.push(String::new());
    }

    let dasha = report
        .dasha_yog
        .iter()
        .map(|d| {
            format!(
                "{} {:<9} {} {} {} {} = {}  {}",
                d.year, d.month_name, d.pyr, d.pmo, d.mda, d.ada, d.summation, d.interpretation
            )
        })
        .collect();

    let lucky = report
        .lucky_numbers
        .iter()
        .map(|l| format!("{}: {}  {}", l.year, l.number, l.effect))
        .collect();

    vec![
        Section { title: "Core Numbers", body: core },
        Section { title: "Compatibility", body: compatibility },
        Section { title: "Mobile Yogs", body: yogs },
        Section { title: "Digit Positions", body: positions },
        Section { title: "Name Numerology", body: name_table_lines(report) },
        Section { title: "Grids", body: grid_body },
        Section { title: "Harmony", body: harmony_lines(report) },
        Section { title: "Universal Energies", body: energies_lines(report) },
        Section { title: "Dasha Yog", body: dasha },
        Section { title: "Lucky Numbers", body: lucky },
        Section { title: "Remedies", body: remedies_lines(report) },
    ]
}
