use rayshade::film::{Film, Image};
use rayshade::renderer::{RenderConfig, Renderer};
use rayshade::*;

use anyhow::{anyhow, bail, Context};
use getopts::{Matches, Options};
use log::*;
use std::str::FromStr;

const DEFAULT_LOGGING_LEVEL: &str = "info";

struct Args {
    config: RenderConfig,
    scene: String,
    output: String,
    exr: Option<String>,
    verbose: bool,
}

fn opt_parse<T: FromStr>(matches: &Matches, name: &str, default: T) -> anyhow::Result<T> {
    match matches.opt_str(name) {
        Some(s) => s
            .parse()
            .map_err(|_| anyhow!("invalid value for --{}: {}", name, s)),
        None => Ok(default),
    }
}

fn parse_args(program: &str, args: &[String]) -> anyhow::Result<Option<Args>> {
    let mut opts = Options::new();
    opts.optopt("o", "output", "output image, format from extension", "FILE");
    opts.optopt("", "exr", "also write linear colors as OpenEXR", "FILE");
    opts.optopt("", "width", "image width in pixels", "N");
    opts.optopt("", "height", "image height in pixels", "N");
    opts.optopt("", "fov", "vertical field of view in degrees", "DEG");
    opts.optopt("s", "samples", "dither samples per pixel (1-4)", "N");
    opts.optopt("d", "depth", "maximum reflection depth", "N");
    opts.optopt("j", "threads", "worker threads, default all cores", "N");
    opts.optopt(
        "",
        "scene",
        &format!("scene to render: {}", example_scenes::NAMES.join(", ")),
        "NAME",
    );
    opts.optflag("v", "verbose", "debug logging");
    opts.optflag("h", "help", "print this help");

    let matches = opts.parse(args)?;
    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", program);
        print!("{}", opts.usage(&brief));
        return Ok(None);
    }
    let defaults = RenderConfig::default();
    let config = RenderConfig {
        width: opt_parse(&matches, "width", defaults.width)?,
        height: opt_parse(&matches, "height", defaults.height)?,
        fov_degree: opt_parse(&matches, "fov", defaults.fov_degree)?,
        samples: opt_parse(&matches, "samples", defaults.samples)?,
        max_depth: opt_parse(&matches, "depth", defaults.max_depth)?,
        threads: opt_parse(&matches, "threads", num_cpus::get())?,
        ..defaults
    };
    Ok(Some(Args {
        config,
        scene: opt_parse(&matches, "scene", "classic".to_string())?,
        output: opt_parse(&matches, "output", "image.bmp".to_string())?,
        exr: matches.opt_str("exr"),
        verbose: matches.opt_present("v"),
    }))
}

fn run(args: Args) -> anyhow::Result<()> {
    let Args {
        config,
        scene: scene_name,
        output,
        exr,
        verbose: _,
    } = args;
    let renderer = Renderer::new(config)?;
    let config = renderer.config();
    let (camera, scene) = match example_scenes::by_name(&scene_name, config) {
        Some(v) => v,
        None => bail!(
            "unknown scene {:?}, expected one of {}",
            scene_name,
            example_scenes::NAMES.join(", ")
        ),
    };

    let mut image = Image::filled(config.width, config.height, [127, 127, 127]);
    let mut film = exr
        .as_ref()
        .map(|_| Film::new(config.width, config.height));

    info!("scene {:?}", scene_name);
    let stats = renderer.render(&scene, &camera, &mut image, film.as_mut())?;
    info!(
        "{} pixels, {} primary rays, {:.1} rays/ms",
        stats.pixels,
        stats.primary_rays,
        stats.primary_rays as f64 / (stats.elapsed.as_secs_f64() * 1e3).max(1e-9)
    );

    image
        .write(&output)
        .with_context(|| format!("failed to save {}", output))?;
    if let (Some(film), Some(path)) = (film, exr) {
        film.write_exr(&path)
            .with_context(|| format!("failed to save {}", path))?;
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { DEFAULT_LOGGING_LEVEL };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv[0], &argv[1..]) {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(e) => {
            init_logger(false);
            error!("{:#}", e);
            std::process::exit(2);
        }
    };
    init_logger(args.verbose);
    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Vec<String> {
        extra.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_and_overrides() {
        let parsed = parse_args("rayshade", &args(&[])).unwrap().unwrap();
        assert_eq!(parsed.output, "image.bmp");
        assert_eq!(parsed.scene, "classic");
        assert_eq!(parsed.config.width, 1024);
        assert!(parsed.exr.is_none());

        let parsed = parse_args(
            "rayshade",
            &args(&["--width", "20", "-s", "2", "-j", "3", "--scene", "mirror_hall", "-v"]),
        )
        .unwrap()
        .unwrap();
        assert_eq!(parsed.config.width, 20);
        assert_eq!(parsed.config.samples, 2);
        assert_eq!(parsed.config.threads, 3);
        assert_eq!(parsed.scene, "mirror_hall");
        assert!(parsed.verbose);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(parse_args("rayshade", &args(&["--width", "wide"])).is_err());
        assert!(parse_args("rayshade", &args(&["--bogus"])).is_err());
        assert!(parse_args("rayshade", &args(&["-h"])).unwrap().is_none());
    }

    #[test]
    fn run_writes_image_and_exr() {
        let dir = std::env::temp_dir();
        let bmp = dir.join(format!("rayshade-main-{}.bmp", std::process::id()));
        let exr = dir.join(format!("rayshade-main-{}.exr", std::process::id()));
        let parsed = parse_args(
            "rayshade",
            &args(&[
                "--width",
                "16",
                "--height",
                "12",
                "-j",
                "2",
                "-o",
                bmp.to_str().unwrap(),
                "--exr",
                exr.to_str().unwrap(),
            ]),
        )
        .unwrap()
        .unwrap();
        run(parsed).unwrap();
        assert!(bmp.exists() && exr.exists());
        let _ = std::fs::remove_file(&bmp);
        let _ = std::fs::remove_file(&exr);

        let unknown = Args {
            scene: "cornell".to_string(),
            ..parse_args("rayshade", &args(&["--width", "4", "--height", "4"]))
                .unwrap()
                .unwrap()
        };
        assert!(run(unknown).is_err());
    }
}
