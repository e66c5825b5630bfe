// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host registration glue.
//!
//! The mode announces itself to the host through an explicit descriptor
//! record handed to a [`HostRegistry`] at startup.

use crate::store::Settings;

/// Static metadata binding the inspection mode to the host's mode switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub display_name: &'static str,
    pub switch_action: &'static str,
    pub button_group: &'static str,
    pub button_order: i32,
    pub use_by_default: bool,
    pub safe_start_mode: bool,
}

/// Descriptor for the automap inspection mode.
pub fn automap_mode_descriptor() -> ModeDescriptor {
    ModeDescriptor {
        display_name: "Automap Mode",
        switch_action: "automapmode",
        button_group: "000_editing",
        button_order: i32::MIN + 100,
        use_by_default: true,
        safe_start_mode: true,
    }
}

/// The host's mode registry.
pub trait HostRegistry {
    fn register_mode(&mut self, descriptor: &ModeDescriptor);
}

/// Plugin lifecycle: registers the mode and keeps the loaded settings.
#[derive(Debug, Clone)]
pub struct InspectPlugin {
    settings: Settings,
}

impl InspectPlugin {
    pub fn initialize(registry: &mut dyn HostRegistry, settings: Settings) -> Self {
        registry.register_mode(&automap_mode_descriptor());
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::{automap_mode_descriptor, HostRegistry, InspectPlugin, ModeDescriptor};
    use crate::store::Settings;

    #[derive(Default)]
    struct TestRegistry {
        registered: Vec<ModeDescriptor>,
    }

    impl HostRegistry for TestRegistry {
        fn register_mode(&mut self, descriptor: &ModeDescriptor) {
            self.registered.push(descriptor.clone());
        }
    }

    #[test]
    fn initialize_registers_exactly_one_mode() {
        let mut registry = TestRegistry::default();
        let plugin = InspectPlugin::initialize(&mut registry, Settings::default());

        assert_eq!(registry.registered, vec![automap_mode_descriptor()]);
        assert_eq!(plugin.settings().highlight_radius(), 20.0);
    }

    #[test]
    fn descriptor_is_a_safe_default_start_mode() {
        let descriptor = automap_mode_descriptor();
        assert!(descriptor.safe_start_mode);
        assert!(descriptor.use_by_default);
        assert_eq!(descriptor.switch_action, "automapmode");
    }
}
