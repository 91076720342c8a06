//! Translation of summary tables into plotly figures.

use insights_core::models::{ChartKind, SummaryTable};
use plotly::common::{Mode, Orientation, Title};
use plotly::layout::{Axis, CategoryOrder, Layout};
use plotly::{Bar, Pie, Plot, Scatter};

/// Render `table` as a plotly figure of the requested kind.
///
/// An empty table renders as an empty figure with the title intact, so runs
/// with no surviving events still produce placeholder artifacts.
pub fn render(table: &SummaryTable, kind: ChartKind) -> Plot {
    let categories = table.categories();
    let values = table.values();
    let mut plot = Plot::new();

    match kind {
        ChartKind::Bar => {
            plot.add_trace(Bar::new(categories, values));
            plot.set_layout(
                axis_layout(table)
                    .x_axis(Axis::new().title(Title::with_text(table.category_label.clone())))
                    .y_axis(Axis::new().title(Title::with_text(table.value_label.clone()))),
            );
        }
        ChartKind::HorizontalBar => {
            // Values on x, categories on y; longest bar at the top like the
            // category axis the dashboards conventionally use.
            plot.add_trace(Bar::new(values, categories).orientation(Orientation::Horizontal));
            plot.set_layout(
                axis_layout(table)
                    .x_axis(Axis::new().title(Title::with_text(table.value_label.clone())))
                    .y_axis(
                        Axis::new()
                            .title(Title::with_text(table.category_label.clone()))
                            .category_order(CategoryOrder::TotalAscending),
                    ),
            );
        }
        ChartKind::Line => {
            plot.add_trace(Scatter::new(categories, values).mode(Mode::LinesMarkers));
            plot.set_layout(
                axis_layout(table)
                    .x_axis(Axis::new().title(Title::with_text(table.category_label.clone())))
                    .y_axis(Axis::new().title(Title::with_text(table.value_label.clone()))),
            );
        }
        ChartKind::Pie => {
            plot.add_trace(Pie::new(values).labels(categories));
            plot.set_layout(Layout::new().title(Title::with_text(table.title.clone())));
        }
    }

    plot
}

fn axis_layout(table: &SummaryTable) -> Layout {
    Layout::new()
        .title(Title::with_text(table.title.clone()))
        .show_legend(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SummaryTable {
        let mut table = SummaryTable::new("top_artists", "Top Artists", "Artist", "Plays");
        table.push("Miles Davis", 42.0);
        table.push("John Coltrane", 17.0);
        table
    }

    #[test]
    fn test_render_bar_includes_title_and_categories() {
        let html = render(&sample_table(), ChartKind::Bar).to_html();
        assert!(html.contains("Top Artists"));
        assert!(html.contains("Miles Davis"));
    }

    #[test]
    fn test_render_horizontal_bar() {
        let html = render(&sample_table(), ChartKind::HorizontalBar).to_html();
        assert!(html.contains("Miles Davis"));
        // Horizontal orientation flag serialised into the trace.
        assert!(html.contains("\"orientation\":\"h\""));
    }

    #[test]
    fn test_render_line() {
        let html = render(&sample_table(), ChartKind::Line).to_html();
        assert!(html.contains("Top Artists"));
    }

    #[test]
    fn test_render_pie_carries_labels() {
        let html = render(&sample_table(), ChartKind::Pie).to_html();
        assert!(html.contains("John Coltrane"));
    }

    #[test]
    fn test_render_empty_table_is_placeholder_not_panic() {
        let table = SummaryTable::new("daily", "Tracks Per Day", "Date", "Tracks");
        let html = render(&table, ChartKind::Bar).to_html();
        assert!(html.contains("Tracks Per Day"));
    }
}
