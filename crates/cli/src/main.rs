use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tfigrid::export::DEFAULT_FILE;
use tfigrid::Domain;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod inspect;
mod provenance;

use config::{BlendArg, BoundaryConfig};

#[derive(Parser)]
#[command(name = "tfigrid")]
#[command(about = "Structured 2D grids by transfinite interpolation")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a grid and export it as `x,y` CSV (plus a provenance sidecar)
    Generate {
        /// Boundary JSON; the reference channel when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        nx: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        ny: Option<u32>,
        #[arg(long, default_value = DEFAULT_FILE)]
        out: PathBuf,
        #[arg(long, value_enum)]
        blend: Option<BlendArg>,
    },
    /// Summarize an exported grid CSV
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            config,
            nx,
            ny,
            out,
            blend,
        } => generate(config, nx, ny, out, blend),
        Action::Inspect { input } => inspect(input),
        Action::Report => report(),
    }
}

fn generate(
    config: Option<PathBuf>,
    nx: Option<u32>,
    ny: Option<u32>,
    out: PathBuf,
    blend: Option<BlendArg>,
) -> Result<()> {
    let boundary = match &config {
        Some(path) => BoundaryConfig::load(path)?,
        None => BoundaryConfig::default(),
    };
    let (nx, ny) = boundary.sizes(nx, ny);
    let grid_cfg = boundary.grid_cfg(blend);
    tracing::info!(config = ?config, nx, ny, blend = ?grid_cfg.blend, out = %out.display(), "generate");

    let s = &boundary.curves;
    let (bottom, right, top, left) = (s.bottom.build(), s.right.build(), s.top.build(), s.left.build());
    let mut domain = Domain::with_cfg(
        bottom.as_ref(),
        right.as_ref(),
        top.as_ref(),
        left.as_ref(),
        grid_cfg,
    )?;
    domain.generate(nx, ny)?;
    domain.export(&out)?;

    let payload = provenance::Payload::new(serde_json::json!({
        "config": config.as_ref().map(|p| p.display().to_string()),
        "nx": nx,
        "ny": ny,
        "blend": format!("{:?}", grid_cfg.blend),
        "corner_tol": grid_cfg.corner_tol,
        "curves": boundary.curves,
    }));
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    Ok(())
}

fn inspect(input: PathBuf) -> Result<()> {
    let summary = inspect::summarize(&input)?;
    tracing::info!(
        input = %input.display(),
        points = summary.points,
        x_min = summary.x_min,
        x_max = summary.x_max,
        y_min = summary.y_min,
        y_max = summary.y_max,
        "grid_summary"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "tool": "tfigrid",
        "version": tfigrid::VERSION,
        "code_rev": provenance::current_git_rev(),
        "defaults": BoundaryConfig::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sizes_must_be_positive_integers() {
        assert!(Cmd::try_parse_from(["tfigrid", "generate", "--nx", "0"]).is_err());
        assert!(Cmd::try_parse_from(["tfigrid", "generate", "--nx", "-1", "--ny", "5"]).is_err());
        assert!(Cmd::try_parse_from(["tfigrid", "generate", "--ny", "2.5"]).is_err());
        let ok = Cmd::try_parse_from(["tfigrid", "generate", "--nx", "4", "--blend", "standard"]);
        match ok.map(|c| c.action) {
            Ok(Action::Generate { nx, ny, out, blend, .. }) => {
                assert_eq!(nx, Some(4));
                assert_eq!(ny, None);
                assert_eq!(out, PathBuf::from(DEFAULT_FILE));
                assert_eq!(blend, Some(BlendArg::Standard));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_writes_grid_sidecar_and_summary() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run/grid.csv");
        generate(None, Some(9), Some(4), out.clone(), None).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 10 * 5);
        assert!(dir.path().join("run/grid.provenance.json").exists());

        let summary = inspect::summarize(&out).unwrap();
        assert_eq!(summary.points, 50);
        assert!((summary.x_min + 10.0).abs() < 1e-9);
        assert!((summary.x_max - 5.0).abs() < 1e-9);
        assert!((summary.y_max - 3.0).abs() < 1e-9);
        assert!(summary.y_min >= 0.0);
    }

    #[test]
    fn generate_rejects_open_boundary_config() {
        let dir = tempdir().unwrap();
        let mut cfg = BoundaryConfig::default();
        cfg.curves.top = config::CurveSpec::HLine {
            x0: -10.0,
            x1: 5.0,
            y: 2.0,
        };
        let path = dir.path().join("open.json");
        fs::write(&path, serde_json::to_vec(&cfg).unwrap()).unwrap();
        let out = dir.path().join("grid.csv");
        let err = generate(Some(path), None, None, out.clone(), None).unwrap_err();
        assert!(err.to_string().contains("upper-right"));
        assert!(!out.exists());
    }
}
