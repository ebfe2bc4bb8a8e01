use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ContentError, Result};

const IMAGE_CDN_BASE: &str = "https://cdn.sanity.io/images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Clip,
    Crop,
    Fill,
    FillMax,
    Max,
    Scale,
    Min,
}

impl Fit {
    pub fn as_str(self) -> &'static str {
        match self {
            Fit::Clip => "clip",
            Fit::Crop => "crop",
            Fit::Fill => "fill",
            Fit::FillMax => "fillmax",
            Fit::Max => "max",
            Fit::Scale => "scale",
            Fit::Min => "min",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fit {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "clip" => Ok(Fit::Clip),
            "crop" => Ok(Fit::Crop),
            "fill" => Ok(Fit::Fill),
            "fillmax" => Ok(Fit::FillMax),
            "max" => Ok(Fit::Max),
            "scale" => Ok(Fit::Scale),
            "min" => Ok(Fit::Min),
            other => Err(format!("unknown fit mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedReference<'a> {
    id: &'a str,
    dimensions: &'a str,
    format: &'a str,
}

fn parse_reference(reference: &str) -> Result<ParsedReference<'_>> {
    let invalid = || ContentError::InvalidImageReference(reference.to_string());

    let rest = reference.strip_prefix("image-").ok_or_else(invalid)?;
    let (rest, format) = rest.rsplit_once('-').ok_or_else(invalid)?;
    let (id, dimensions) = rest.rsplit_once('-').ok_or_else(invalid)?;

    let (width, height) = dimensions.split_once('x').ok_or_else(invalid)?;
    if id.is_empty()
        || format.is_empty()
        || width.parse::<u32>().is_err()
        || height.parse::<u32>().is_err()
    {
        return Err(invalid());
    }

    Ok(ParsedReference {
        id,
        dimensions,
        format,
    })
}

#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn image<'a>(&'a self, reference: &'a str) -> ImageRequest<'a> {
        ImageRequest {
            builder: self,
            reference,
            width: None,
            height: None,
            fit: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageRequest<'a> {
    builder: &'a ImageUrlBuilder,
    reference: &'a str,
    width: Option<u32>,
    height: Option<u32>,
    fit: Option<Fit>,
}

impl ImageRequest<'_> {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn url(&self) -> Result<String> {
        let parsed = parse_reference(self.reference)?;
        let mut url = Url::parse(&format!(
            "{IMAGE_CDN_BASE}/{}/{}/{}-{}.{}",
            self.builder.project_id,
            self.builder.dataset,
            parsed.id,
            parsed.dimensions,
            parsed.format
        ))?;

        let mut params = Vec::new();
        if let Some(width) = self.width {
            params.push(("w", width.to_string()));
        }
        if let Some(height) = self.height {
            params.push(("h", height.to_string()));
        }
        if let Some(fit) = self.fit {
            params.push(("fit", fit.as_str().to_string()));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url.into())
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
