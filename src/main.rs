use std::{env, fs};

use anyhow::Context;
use log::info;
use serde::Serialize;

use product_lab::{Lab, LabConfig, Model, chart::Plot};

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 256.0;

#[derive(Serialize)]
struct Report<'a> {
    rows: usize,
    model: &'a Model,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::var("LAB_CONFIG") {
        Ok(path) => {
            LabConfig::load(&path).with_context(|| format!("cannot load config '{path}'"))?
        }
        Err(_) => LabConfig::default(),
    };

    let mut lab = Lab::new(config);

    match env::args().nth(1) {
        Some(path) => {
            lab.upload_file(&path)
                .with_context(|| format!("cannot fit '{path}'"))?;
        }
        None => info!("no csv given, using the built-in dataset"),
    }

    if env::var_os("LAB_JSON").is_some() {
        let report = Report {
            rows: lab.rows(),
            model: lab.model(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("Rows: {}", lab.rows());
        println!("{}", lab.model());
    }

    if let Ok(path) = env::var("LAB_SVG") {
        let svg = Plot::new(CHART_WIDTH, CHART_HEIGHT)
            .layout(lab.dataset(), lab.model())
            .to_svg();
        fs::write(&path, svg).with_context(|| format!("cannot write chart to '{path}'"))?;
        info!("chart written to {path}");
    }

    Ok(())
}
