use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_linestack::{Color, GpuiSliderView, SliderController, SliderViewConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(160.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let builder = SliderController::builder()
                .range(0.0, 10.0)
                .number_of_lines(100)
                .line_color(Color::new(0.2, 0.8, 0.9, 1.0))
                .on_value_changed(|value| tracing::info!(value, "slider value"));
            let view = GpuiSliderView::new(builder)
                .expect("valid slider configuration")
                .with_view_config(SliderViewConfig {
                    background: Color::new(0.08, 0.08, 0.1, 1.0),
                    corner_radius: 1.0,
                });
            cx.new(|_| view)
        })
        .unwrap();
    });
}
