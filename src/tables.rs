use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use timebar::{Consistency, TimeInterval};

pub fn build_intervals_table(intervals: &[TimeInterval], consistency: &Consistency) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["#", "Start", "End", "Duration", "Status"]);
    for (index, interval) in intervals.iter().enumerate() {
        let status = match consistency.check(interval) {
            Ok(()) => Cell::new("ok").fg(Color::Green),
            Err(error) => Cell::new(error).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(index).add_attribute(Attribute::Dim),
            Cell::new(interval.start_time).set_alignment(CellAlignment::Right),
            Cell::new(interval.end_time).set_alignment(CellAlignment::Right),
            Cell::new(interval.duration).set_alignment(CellAlignment::Right),
            status,
        ]);
    }
    table
}
