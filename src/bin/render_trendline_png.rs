#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "target/trendline.png";

#[cfg(feature = "cairo-backend")]
struct CliArgs {
    config_path: PathBuf,
    output_path: PathBuf,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = chart_trendline::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use chart_trendline::api::{StaticChart, TrendlinePlugin};
    use chart_trendline::render::CairoRenderer;

    let CliArgs {
        config_path,
        output_path,
    } = parse_args()?;
    let raw = fs::read_to_string(&config_path).map_err(|err| {
        format!(
            "failed to read chart config `{}`: {err}",
            config_path.display()
        )
    })?;
    let chart = StaticChart::from_json_str(&raw)
        .map_err(|err| format!("invalid chart config: {err}"))?;

    let viewport = chart.config().viewport;
    let width = i32::try_from(viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height)
        .map_err(|err| format!("renderer init failed: {err}"))?;

    let frame = TrendlinePlugin::new().build_frame(&chart);
    renderer
        .render(&frame)
        .map_err(|err| format!("render failed: {err}"))?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            format!("failed to create output dir `{}`: {err}", parent.display())
        })?;
    }
    let mut file = File::create(&output_path).map_err(|err| {
        format!("failed to create png `{}`: {err}", output_path.display())
    })?;
    renderer
        .surface()
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", output_path.display()))?;

    println!(
        "rendered {} trendline(s) -> {}",
        renderer.lines_drawn(),
        output_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let config_path = config_path
        .ok_or_else(|| format!("missing --config\n\n{}", usage_message()))?;
    Ok(CliArgs {
        config_path,
        output_path,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_trendline_png --config <chart.json> [--output <png>]\n\
         \n\
         Renders the trendlines of every visible dataset in a chart config.\n\
         Default output: {DEFAULT_OUTPUT_PATH}"
    )
}
