//! Persistence of last-entered form fields.
//!
//! The quoting engine never touches this; front ends read remembered values
//! to pre-fill inputs and write them back after each submission.

use crate::config::{Thickness, DEFAULT_LABOR_FACTOR};
use crate::error::{QuoteError, Result};
use crate::model::{BoxRequest, PanelRequest};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Field keys used by the box and panel forms.
pub mod keys {
    pub const BOX_WIDTH: &str = "box_width";
    pub const BOX_HEIGHT: &str = "box_height";
    pub const BOX_DEPTH: &str = "box_depth";
    pub const BOX_THICKNESS: &str = "box_thickness";
    pub const BOX_QUANTITY: &str = "box_quantity";
    pub const BOX_LABOR_FACTOR: &str = "box_labor_factor";
    pub const PANEL_WIDTH: &str = "panel_width";
    pub const PANEL_HEIGHT: &str = "panel_height";
    pub const PANEL_THICKNESS: &str = "panel_thickness";
}

/// String key-value storage for form fields.
pub trait FormStore {
    /// Get a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Forget a value.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Get a stored value parsed as `T`. Unparsable values read as missing.
    fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}

fn required<T, S>(value: Option<T>, store: &S, key: &str) -> Result<T>
where
    T: FromStr,
    S: FormStore,
{
    value
        .or_else(|| store.get_parsed(key))
        .ok_or_else(|| QuoteError::InvalidInput {
            message: format!("{} was not given and nothing is remembered", key),
        })
}

/// Box form as submitted. Blank fields are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxForm {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub thickness: Option<Thickness>,
    pub quantity: Option<u32>,
    pub labor_factor: Option<f64>,
}

impl BoxForm {
    /// Build a request from the submitted fields, falling back to remembered
    /// values. Quantity and labor factor default to 1 when neither exists.
    pub fn resolve<S: FormStore>(&self, store: &S) -> Result<BoxRequest> {
        Ok(BoxRequest {
            width: required(self.width, store, keys::BOX_WIDTH)?,
            height: required(self.height, store, keys::BOX_HEIGHT)?,
            depth: required(self.depth, store, keys::BOX_DEPTH)?,
            thickness: required(self.thickness, store, keys::BOX_THICKNESS)?,
            quantity: self
                .quantity
                .or_else(|| store.get_parsed(keys::BOX_QUANTITY))
                .unwrap_or(1),
            labor_factor: self
                .labor_factor
                .or_else(|| store.get_parsed(keys::BOX_LABOR_FACTOR))
                .unwrap_or(DEFAULT_LABOR_FACTOR),
        })
    }
}

/// Panel form as submitted. Blank fields are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelForm {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub thickness: Option<Thickness>,
}

impl PanelForm {
    /// Build a request from the submitted fields, falling back to remembered
    /// values.
    pub fn resolve<S: FormStore>(&self, store: &S) -> Result<PanelRequest> {
        Ok(PanelRequest {
            width: required(self.width, store, keys::PANEL_WIDTH)?,
            height: required(self.height, store, keys::PANEL_HEIGHT)?,
            thickness: required(self.thickness, store, keys::PANEL_THICKNESS)?,
        })
    }
}

/// Remember every field of a quoted box request.
pub fn remember_box<S: FormStore>(store: &mut S, request: &BoxRequest) -> Result<()> {
    store.set(keys::BOX_WIDTH, &request.width.to_string())?;
    store.set(keys::BOX_HEIGHT, &request.height.to_string())?;
    store.set(keys::BOX_DEPTH, &request.depth.to_string())?;
    store.set(keys::BOX_THICKNESS, &request.thickness.to_string())?;
    store.set(keys::BOX_QUANTITY, &request.quantity.to_string())?;
    store.set(keys::BOX_LABOR_FACTOR, &request.labor_factor.to_string())?;
    Ok(())
}

/// Remember every field of a quoted panel request.
pub fn remember_panel<S: FormStore>(store: &mut S, request: &PanelRequest) -> Result<()> {
    store.set(keys::PANEL_WIDTH, &request.width.to_string())?;
    store.set(keys::PANEL_HEIGHT, &request.height.to_string())?;
    store.set(keys::PANEL_THICKNESS, &request.thickness.to_string())?;
    Ok(())
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let json = std::fs::read_to_string(&path)?;
            if json.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&json)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened form store {} ({} field(s))", path.display(), values.len());
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl FormStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
