//! Registry of the models exposed by one admin panel.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{AdminError, AdminResult};
use crate::model_admin::ModelAdmin;

/// Holds every registered [`ModelAdmin`] under its model name.
///
/// Registration happens at startup; afterwards the site is shared
/// read-only behind an `Arc`, so no interior locking is needed. Models
/// iterate in name order, which fixes the dashboard listing.
pub struct AdminSite {
	title: String,
	models: BTreeMap<String, Arc<dyn ModelAdmin>>,
}

impl AdminSite {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			models: BTreeMap::new(),
		}
	}

	/// Browser-visible panel title.
	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn register(&mut self, admin: Arc<dyn ModelAdmin>) -> AdminResult<()> {
		let name = admin.model_name().to_string();
		if self.models.contains_key(&name) {
			return Err(AdminError::AlreadyRegistered(name));
		}
		self.models.insert(name, admin);
		Ok(())
	}

	pub fn get_model_admin(&self, name: &str) -> AdminResult<Arc<dyn ModelAdmin>> {
		self.models
			.get(name)
			.cloned()
			.ok_or_else(|| AdminError::ModelNotRegistered(name.to_string()))
	}

	pub fn model_names(&self) -> Vec<String> {
		self.models.keys().cloned().collect()
	}

	pub fn is_registered(&self, name: &str) -> bool {
		self.models.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.models.len()
	}

	pub fn is_empty(&self) -> bool {
		self.models.is_empty()
	}
}
