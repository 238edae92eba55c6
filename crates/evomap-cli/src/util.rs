use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use evomap_engine::Scenario;
use evomap_router::PixelPoint;

/// Destination of a JSON document: stdout, or a file when `--output` is given.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => Self::create(path)?,
            None => Self::Stdout(io::stdout().lock()),
        };
        output.write_json(value)?;
        if let Self::File { path, .. } = &output {
            tracing::info!(path = %path.display(), "output written");
        }
        Ok(())
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn display_path(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_owned(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let target = self.display_path();
        let writer: &mut dyn io::Write = match self {
            Self::Stdout(writer) => writer,
            Self::File { writer, .. } => writer,
        };
        serde_json::to_writer_pretty(&mut *writer, value)
            .with_context(|| format!("Failed to write JSON to {target}"))?;
        writeln!(writer).with_context(|| format!("Failed to write to {target}"))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {target}"))?;
        Ok(())
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Loads and validates a scenario file, or returns the built-in tea shop.
pub fn load_scenario(path: Option<&Path>) -> anyhow::Result<Scenario> {
    let Some(path) = path else {
        tracing::debug!("using built-in scenario");
        return Ok(Scenario::tea_shop());
    };
    let scenario: Scenario = read_json_file("scenario", path)?;
    scenario
        .validate()
        .with_context(|| format!("Invalid scenario: {}", path.display()))?;
    tracing::debug!(name = %scenario.name, items = scenario.items.len(), "scenario loaded");
    Ok(scenario)
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PointParseError {
    #[display("expected `x,y`, got `{_0}`")]
    Format(#[error(not(source))] String),
    #[display("invalid coordinate `{_0}`")]
    Coordinate(#[error(not(source))] String),
}

/// Parses an `x,y` pair of finite pixel coordinates.
pub fn parse_point(s: &str) -> Result<PixelPoint, PointParseError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| PointParseError::Format(s.to_owned()))?;
    let coordinate = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PointParseError::Coordinate(value.trim().to_owned()))
    };
    Ok(PixelPoint::new(coordinate(x)?, coordinate(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10,20"), Ok(PixelPoint::new(10.0, 20.0)));
        assert_eq!(parse_point(" -1.5 , 3e2 "), Ok(PixelPoint::new(-1.5, 300.0)));
    }

    #[test]
    fn test_parse_point_rejects_malformed_input() {
        assert_eq!(
            parse_point("10"),
            Err(PointParseError::Format("10".to_owned()))
        );
        assert_eq!(
            parse_point("10,abc"),
            Err(PointParseError::Coordinate("abc".to_owned()))
        );
        assert!(parse_point("inf,0").is_err());
        assert!(parse_point("1,2,3").is_err());
    }

    #[test]
    fn test_save_json_to_file() {
        let path = std::env::temp_dir().join(format!("evomap-util-{}.json", std::process::id()));
        let scenario = Scenario::tea_shop();
        Output::save_json(&scenario, Some(path.clone())).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        let loaded: Scenario = read_json_file("scenario", &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_load_builtin_scenario() {
        let scenario = load_scenario(None).unwrap();
        assert_eq!(scenario, Scenario::tea_shop());
    }
}
