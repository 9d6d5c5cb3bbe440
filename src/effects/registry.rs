use crate::effects::{
    color::{ColorOverlay, HueSaturation, Invert, Sepia},
    focus::{CircleFocusBlur, PortraitMode},
    geometry::{Corners, HStrip, Mirror, Pixelated, VMirror, VStrip},
    temporal::Goost,
    Effect,
};

/// Registry of available effects
///
/// The registry is a single ordered sequence: iteration order is insertion
/// order, which drives output file naming and log ordering. Each entry
/// carries its own name via [`Effect::name`], so there is no separate name
/// list to keep in sync.
pub struct EffectRegistry {
    effects: Vec<Box<dyn Effect>>,
}

impl EffectRegistry {
    /// Create a new registry with all built-in effects in their standard order
    pub fn new() -> Self {
        let mut registry = Self {
            effects: Vec::new(),
        };
        registry.register_builtin_effects();
        registry
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    fn register_builtin_effects(&mut self) {
        self.register(Box::new(HueSaturation::new()));
        self.register(Box::new(ColorOverlay::default()));
        self.register(Box::new(Sepia::default()));
        self.register(Box::new(CircleFocusBlur::new()));
        self.register(Box::new(PortraitMode::new()));
        self.register(Box::new(Invert::new()));
        self.register(Box::new(Goost::new()));
        self.register(Box::new(Mirror::new()));
        self.register(Box::new(VMirror::new()));
        self.register(Box::new(Corners::new()));
        self.register(Box::new(Pixelated::default()));
        self.register(Box::new(HStrip::new()));
        self.register(Box::new(VStrip::new()));
    }

    /// Append an effect to the registry
    ///
    /// An effect with the same name as an existing entry replaces it in
    /// place, keeping the original position.
    pub fn register(&mut self, effect: Box<dyn Effect>) {
        if let Some(existing) = self
            .effects
            .iter_mut()
            .find(|e| e.name() == effect.name())
        {
            *existing = effect;
        } else {
            self.effects.push(effect);
        }
    }

    /// Look up an effect by name
    pub fn get(&self, name: &str) -> Option<&dyn Effect> {
        self.effects
            .iter()
            .find(|effect| effect.name() == name)
            .map(|effect| effect.as_ref())
    }

    /// Iterate over the effects in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Effect> {
        self.effects.iter().map(|effect| effect.as_ref())
    }

    /// Get all effect names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.effects.iter().map(|effect| effect.name()).collect()
    }

    /// Check if an effect is available
    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.iter().any(|effect| effect.name() == name)
    }

    /// Get the number of registered effects
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
