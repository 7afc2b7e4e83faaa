// Shared builders for behavior tests
pub use finview_core::{
    axis_domain, join_forecast, partition, trailing_window, AxisDomain, ChartFrame, Point,
    Timeframe, ValidationError, WindowTable,
};
pub use finview_dashboard::{
    DashboardConfig, DashboardState, KpiCard, SeriesProvider, SidebarSummary, StaticProvider,
};

/// Historical points labeled `P1..=Pn` with strictly rising prices.
pub fn past_points(count: usize) -> Vec<Point> {
    (1..=count)
        .map(|i| Point::past(format!("P{i}"), 100.0 + i as f64).expect("valid point"))
        .collect()
}

/// Forecast points labeled `F1..=Fn` continuing the rise.
pub fn forecast_points(count: usize) -> Vec<Point> {
    (1..=count)
        .map(|i| Point::forecast(format!("F{i}"), 200.0 + i as f64).expect("valid point"))
        .collect()
}

/// Combined series: `count_past` observed points followed by `count_future`
/// forecast points, insertion order as time order.
pub fn combined_series(count_past: usize, count_future: usize) -> Vec<Point> {
    let mut series = past_points(count_past);
    series.extend(forecast_points(count_future));
    series
}
