//! Human-readable and CSV renderings of an [`EvaluationReport`].
//!
//! All two-decimal rounding happens here, after aggregation.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::Observed;
use crate::error::Result;
use crate::evaluator::{EvaluationReport, MetricResult};

pub const CSV_HEADER: &str = "Métrica,Puntos Máx,Ideal,Observado,Desviación (%),Puntaje Final";

/// File name offered when exporting a report.
pub const DEFAULT_CSV_FILE_NAME: &str = "analisis_armonia_facial.csv";

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Scalar(v) => write!(f, "{:.2}", v),
            Observed::Triple([a, b, c]) => write!(f, "({:.2} : {:.2} : {:.2})", a, b, c),
        }
    }
}

impl fmt::Display for MetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "  Valor Ideal: {} | Valor Observado: {}",
            self.ideal, self.observed
        )?;
        writeln!(f, "  Puntos Máx: {}", self.max_points)?;
        writeln!(f, "  Desviación: {:.2}%", self.deviation_pct)?;
        writeln!(f, "  Puntaje Final: {:.2} / {}", self.score, self.max_points)?;
        writeln!(
            f,
            "  Cálculo: {max} - ({max} × {dev:.2} / 100) = {score:.2} puntos.",
            max = self.max_points,
            dev = self.deviation_pct,
            score = self.score
        )
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.results() {
            writeln!(f, "{}", result)?;
        }
        writeln!(f, "Puntaje Final de Armonía")?;
        writeln!(
            f,
            "  Promedio de los {} puntajes: {:.2}",
            self.results().len(),
            self.aggregate_score()
        )?;
        write!(
            f,
            "  Total de Puntos Obtenidos: {:.2} / {}",
            self.total_score(),
            self.total_max_points()
        )
    }
}

impl EvaluationReport {
    /// Multi-line report for display.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// "87.43 / 100"
    pub fn total_summary(&self) -> String {
        format!("{:.2} / {}", self.total_score(), self.total_max_points())
    }

    pub fn write_csv<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", CSV_HEADER)?;
        for r in self.results() {
            let observed = r.observed.to_string();
            let quote = matches!(r.observed, Observed::Triple(_));
            writeln!(
                w,
                "{},{},{},{},{:.2},{:.2}",
                csv_field(r.name, false),
                r.max_points,
                r.ideal,
                csv_field(&observed, quote),
                r.deviation_pct,
                r.score
            )?;
        }
        writeln!(w)?;
        writeln!(w, ",Promedio Final,,,{:.2}", self.aggregate_score())?;
        w.flush()?;
        Ok(())
    }

    pub fn to_csv(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_csv(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn csv_field(value: &str, force_quote: bool) -> Cow<'_, str> {
    if force_quote || value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
