mod fixed;
mod framebuffer;
mod params;
mod plane;
mod ppm;
mod ray;
mod renderer;
mod shade;
mod trig;

use std::io;
use std::process;

use fixed::Vec3;
use params::Params;
use renderer::{render, Camera};

/// Parsed invocation: camera, sun, and the resolved tunables.
struct Args {
    camera: Camera,
    sun: Vec3,
    params: Params,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} CAM_X CAM_Y CAM_Z HEADING SUN_X SUN_Y SUN_Z [OPTIONS]\n\
         \n\
         Renders one {}x{} frame as binary PPM (P6) on stdout.\n\
         \n\
         Options:\n\
         \x20 --variant NAME   Preset calibration: 'classic' or 'rework' (default: classic)\n\
         \x20 --params FILE    Load tunables from a JSON file (overrides --variant)\n\
         \x20 --help           Show this help message",
        program,
        framebuffer::WIDTH,
        framebuffer::HEIGHT
    )
}

/// Parse command line arguments: seven positional integers plus options.
fn parse_args() -> Result<Args, String> {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map_or("sundown", String::as_str);

    let mut positional: Vec<i32> = Vec::new();
    let mut params: Option<Params> = None;

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--help" => {
                println!("{}", usage(program));
                process::exit(0);
            },
            "--variant" => {
                i += 1;
                let name = argv.get(i).ok_or_else(|| usage(program))?;
                params = Some(Params::variant(name)?);
            },
            "--params" => {
                i += 1;
                let path = argv.get(i).ok_or_else(|| usage(program))?;
                params = Some(Params::load(path)?);
            },
            value => {
                let n: i32 = value.parse().map_err(|_| usage(program))?;
                positional.push(n);
            },
        }
        i += 1;
    }

    if positional.len() < 7 {
        return Err(usage(program));
    }

    Ok(Args {
        camera: Camera {
            position: Vec3::new(positional[0], positional[1], positional[2]),
            heading: positional[3],
        },
        sun: Vec3::new(positional[4], positional[5], positional[6]),
        params: params.unwrap_or_default(),
    })
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        },
    };

    let frame = render(&args.camera, args.sun, &args.params);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = ppm::write_ppm(&mut out, &frame) {
        eprintln!("failed to write frame: {}", e);
        process::exit(1);
    }
}
