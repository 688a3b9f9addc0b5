use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::chart::{figures, ChartFigure};
use crate::color::{hex_color, tint};
use crate::state::AppState;

/// Vertical space taken by a card's title and frame, besides the plot.
const CARD_CHROME: f32 = 56.0;
const MIN_PLOT_HEIGHT: f32 = 160.0;

// ---------------------------------------------------------------------------
// Chart cards (central panel)
// ---------------------------------------------------------------------------

/// Render the price and volume charts stacked in the central panel.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let (price, volume) = figures(&state.series);
    let height = ((ui.available_height() - 2.0 * CARD_CHROME) / 2.0).max(MIN_PLOT_HEIGHT);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            chart_card(ui, &price, height);
            ui.add_space(8.0);
            chart_card(ui, &volume, height);
        });
}

fn chart_card(ui: &mut Ui, figure: &ChartFigure, height: f32) {
    let spec = figure.spec;
    let color = hex_color(spec.color);

    egui::Frame::group(ui.style())
        .fill(tint(color, 0.45, 10))
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.add_space(ui.available_width() * spec.title_x as f32);
                ui.label(RichText::new(spec.title).heading());
                if figure.points.is_empty() {
                    ui.label(RichText::new("no records match these filters").weak());
                }
            });

            let points: PlotPoints = figure
                .points
                .iter()
                .map(|p| [day_number(p.date), p.value])
                .collect();

            // Axes are fixed, as in a static report.
            Plot::new(spec.id)
                .height(height)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .allow_double_click_reset(false)
                .x_axis_formatter(|mark, _range| format_day(mark.value, "%b %Y"))
                .y_axis_formatter(move |mark, _range| spec.tick_label(mark.value))
                .label_formatter(move |_name, point| {
                    format!(
                        "{}\n{}",
                        format_day(point.x, "%Y-%m-%d"),
                        spec.hover.format(point.y)
                    )
                })
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).name(spec.title).color(color).width(2.0));
                });
        });
}

// ---------------------------------------------------------------------------
// Date axis helpers
// ---------------------------------------------------------------------------

/// Dates are plotted as day numbers so the x axis stays linear in time.
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`day_number`]; empty for values outside chrono's range.
pub fn format_day(value: f64, fmt: &str) -> String {
    if !value.is_finite() || value.abs() > i32::MAX as f64 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
        .map(|d| d.format(fmt).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbers_round_trip_through_labels() {
        let date = NaiveDate::from_ymd_opt(2015, 1, 4).unwrap();
        assert_eq!(format_day(day_number(date), "%Y-%m-%d"), "2015-01-04");
        assert_eq!(format_day(day_number(date) + 0.4, "%b %Y"), "Jan 2015");
    }

    #[test]
    fn consecutive_weeks_are_seven_apart() {
        let a = NaiveDate::from_ymd_opt(2015, 12, 27).unwrap();
        let b = NaiveDate::from_ymd_opt(2016, 1, 3).unwrap();
        assert_eq!(day_number(b) - day_number(a), 7.0);
    }

    #[test]
    fn out_of_range_values_format_empty() {
        assert_eq!(format_day(f64::NAN, "%Y"), "");
        assert_eq!(format_day(1e12, "%Y"), "");
    }
}
