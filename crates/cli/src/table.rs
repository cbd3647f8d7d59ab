//! Box-drawn table of creatures.
//!
//! Column widths grow to fit the widest cell, measured in characters.

use menagerie_domain::Creature;

const HEADERS: [&str; 9] = [
    "No.",
    "Name",
    "Species",
    "Age",
    "Magic Power",
    "Magic Type",
    "Can Fly",
    "Discovery Date",
    "HP",
];

fn cells(position: usize, creature: &Creature) -> [String; 9] {
    [
        position.to_string(),
        creature.name().to_string(),
        creature.species().to_string(),
        creature.age().to_string(),
        format!("{:.1}", creature.magic_power().value()),
        creature.magic_type().to_string(),
        if creature.can_fly() { "Yes" } else { "No" }.to_string(),
        creature.discovery_date().to_string(),
        creature.health_points().to_string(),
    ]
}

fn border(left: char, joint: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&joint.to_string()))
}

fn row<S: AsRef<str>>(values: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(value, width)| format!(" {:<width$} ", value.as_ref(), width = *width))
        .collect();
    format!("│{}│", padded.join("│"))
}

/// Render `creatures` numbered from 1 in the given order.
pub fn render_creature_table(creatures: &[&Creature]) -> String {
    let rows: Vec<[String; 9]> = creatures
        .iter()
        .enumerate()
        .map(|(i, creature)| cells(i + 1, creature))
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border('┌', '┬', '┐', &widths));
    lines.push(row(&HEADERS, &widths));
    lines.push(border('├', '┼', '┤', &widths));
    for cells in &rows {
        lines.push(row(cells, &widths));
    }
    lines.push(border('└', '┴', '┘', &widths));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use menagerie_domain::{CreatureDraft, MagicType};

    fn creature(name: &str, can_fly: bool) -> Creature {
        Creature::create(
            CreatureDraft {
                name: name.to_string(),
                species: "Dragon".to_string(),
                age: 1200,
                magic_power: 512.345,
                magic_type: MagicType::Fire,
                can_fly,
                discovery_date: NaiveDate::from_ymd_opt(1937, 9, 21).unwrap(),
                health_points: 450,
            },
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn renders_header_and_rows() {
        let smaug = creature("Smaug", true);
        let puff = creature("Puff", false);
        let table = render_creature_table(&[&smaug, &puff]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[1].contains("Discovery Date"));
        assert!(lines[3].starts_with("│ 1   │ Smaug │ Dragon  │ 1200 │ 512.3"));
        assert!(lines[3].contains("│ Yes     │ 21.09.1937     │ 450 │"));
        assert!(lines[4].contains("│ No      │"));
        assert!(lines[5].starts_with('└'));
    }

    #[test]
    fn all_lines_have_equal_width() {
        let long = creature("Abcdefghij Klmnopqrstuvwx", true);
        let table = render_creature_table(&[&long]);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_table_has_only_frame() {
        let table = render_creature_table(&[]);
        assert_eq!(table.lines().count(), 4);
    }
}
