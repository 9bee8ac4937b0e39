use clap::{Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vectors_core::{cross, dot, Vector3, VectorError};

/// Vector arithmetic demo and PPM gradient renderer
#[derive(Parser, Debug)]
#[command(name = "vectors-demo")]
#[command(about = "Vector3 showcase and PPM gradient renderer", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a red/green gradient image in PPM (P3) format to stdout
    Render {
        /// Image width in pixels
        #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(2..))]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(2..))]
        height: u32,

        /// Maximum color channel value written in the header
        #[arg(long, default_value_t = 255)]
        max_color: i32,
    },

    /// Print the result of each vector operation on two sample vectors
    Showcase,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Progress goes to stderr so stdout stays a clean image
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Render {
            width,
            height,
            max_color,
        } => render_gradient(&mut out, width, height, max_color)?,
        Command::Showcase => showcase(&mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Red ramps left to right, green ramps top to bottom, blue stays zero.
fn render_gradient<W: Write>(
    out: &mut W,
    width: u32,
    height: u32,
    max_color: i32,
) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{width} {height}")?;
    writeln!(out, "{max_color}")?;

    let x_span = f64::from(width - 1);
    let y_span = f64::from(height - 1);

    for j in 0..height {
        info!("Scanlines remaining: {}", height - j);
        for i in 0..width {
            let rgb = Vector3::new(f64::from(i) / x_span, f64::from(j) / y_span, 0.0);
            out.write_all(rgb.to_ppm_color(max_color).as_bytes())?;
        }
    }

    info!("Done.");
    Ok(())
}

fn showcase<W: Write>(out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let u = Vector3::new(1.0, 2.0, 3.0);
    let mut v = Vector3::new(2.0, 3.0, 4.0);

    writeln!(out, "Cross: {}", cross(u, v))?;
    writeln!(out, "Dot: {}", dot(u, v))?;
    writeln!(out, "Add: {}", u + v)?;
    writeln!(out, "Subtract: {}", u - v)?;
    writeln!(out, "Multiply: {}", u * v)?;
    writeln!(out, "Multiply w/ Scalar: {}", u * 2)?;
    writeln!(out, "Normalize: {}", u.get_normalized()?)?;
    v.normalize()?;
    writeln!(out, "Normalize in place: {v}")?;

    let mut negated = u;
    negated.negate_in_place();
    writeln!(out, "Negate: {negated}")?;

    // Zero vectors are the one case callers must guard against
    if let Err(err @ VectorError::DivisionByZero(_)) = Vector3::ZERO.get_normalized() {
        writeln!(out, "Normalize zero: {err}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_gradient_small_image() {
        let mut buf = Vec::new();
        render_gradient(&mut buf, 2, 2, 255).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n0 0 0\n255 0 0\n0 255 0\n255 255 0\n");
    }

    #[test]
    fn test_render_gradient_line_count() {
        let mut buf = Vec::new();
        render_gradient(&mut buf, 4, 3, 255).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 3 + 4 * 3);
    }

    #[test]
    fn test_showcase_output() {
        let mut buf = Vec::new();
        showcase(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Cross: -1.000000 2.000000 -1.000000");
        assert_eq!(lines[1], "Dot: 20");
        assert_eq!(lines[2], "Add: 3.000000 5.000000 7.000000");
        assert_eq!(lines[3], "Subtract: -1.000000 -1.000000 -1.000000");
        assert_eq!(lines[4], "Multiply: 2.000000 6.000000 12.000000");
        assert_eq!(lines[5], "Multiply w/ Scalar: 2.000000 4.000000 6.000000");
        assert_eq!(lines[8], "Negate: -1.000000 -2.000000 -3.000000");
        assert_eq!(
            lines[9],
            "Normalize zero: DivisionByZero: cannot normalize a zero vector"
        );
    }
}
