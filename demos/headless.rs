use gpui_linestack::{BarStates, Color, SliderConfig, SliderController};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gpui_linestack=debug")),
        )
        .init();

    let bars = BarStates::new();
    let controller = SliderController::builder()
        .range(0.0, 10.0)
        .number_of_lines(40)
        .initial_value(2.5)
        .line_color(Color::from_hex("#1e88e5").unwrap_or(Color::BLACK))
        .on_value_changed(|value| tracing::info!(value, "value changed"))
        .build(bars.clone())
        .expect("valid slider configuration");

    let _log = controller
        .current_value_publisher()
        .subscribe(|value| println!("published {value:.3}"));

    controller.set_width(400.0);
    controller.on_pointer_began(80.0);
    for x in [120.0, 200.0, 320.0, 460.0] {
        controller.on_pointer_moved(x);
    }
    controller.on_pointer_ended();

    let row: String = controller
        .bar_scales()
        .iter()
        .map(|scale| match *scale {
            s if s >= 1.6 => '#',
            s if s >= 1.35 => '+',
            s if s > 1.0 => '-',
            _ => '.',
        })
        .collect();
    println!("{row}");

    let description = r#"{ "maxValue": 5, "numberOfLines": 20, "initialValue": 3 }"#;
    match SliderConfig::from_json_str(description)
        .and_then(|config| SliderController::from_config(config, BarStates::new()))
    {
        Ok(slider) => println!("declarative slider starts at {}", slider.current_value()),
        Err(err) => eprintln!("invalid description: {err}"),
    }
}
