//! Scene assembly and the reactive component state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use yuseong_core::{Attribute, Configuration, Diagnostic, GenerationConstants, GradientStyle};

use crate::descriptor::{BlackHole, Meteor, Star};
use crate::{factory, validate};

/// The materialised element layers for one configuration.
///
/// A scene is the component's render arena: every regeneration wholesale
/// replaces a layer's descriptors rather than diffing them. The host reads
/// the layers each frame and materialises them however it likes.
#[derive(Debug, Default)]
pub struct Scene {
    stars: Vec<Star>,
    meteors: Vec<Meteor>,
    black_hole: Option<BlackHole>,
    cycle: u64,
}

impl Scene {
    /// The star layer.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// The meteor layer.
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// The black hole, if currently shown.
    pub fn black_hole(&self) -> Option<&BlackHole> {
        self.black_hole.as_ref()
    }

    /// Number of completed regenerations. Bumps whenever any layer is
    /// rebuilt, so hosts can restart their animation clocks on change.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Stop every animation in place, keeping the descriptors.
    fn freeze(&mut self) {
        for star in &mut self.stars {
            star.twinkle_delay_s = None;
        }
        for meteor in &mut self.meteors {
            meteor.animation = None;
        }
        if let Some(hole) = &mut self.black_hole {
            hole.drift = None;
        }
    }
}

/// The meteor shower component.
///
/// Holds the validated configuration, the per-attribute raw value cache used
/// to suppress no-op churn, and the scene the configuration projects into.
/// The lifecycle mirrors a custom element: attribute changes before
/// [`mount`](Self::mount) accumulate silently, changes after it trigger a
/// full regeneration, and [`unmount`](Self::unmount) freezes all animations
/// in place.
#[derive(Debug)]
pub struct MeteorShower {
    config: Configuration,
    constants: GenerationConstants,
    rng: ChaCha8Rng,
    scene: Option<Scene>,
    raw_values: [Option<String>; Attribute::ALL.len()],
    diagnostics: Vec<Diagnostic>,
}

impl Default for MeteorShower {
    fn default() -> Self {
        Self::new()
    }
}

impl MeteorShower {
    /// Create a component seeded from the system clock.
    pub fn new() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Create a component with a fixed seed for reproducible generation.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: Configuration::default(),
            constants: GenerationConstants::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            scene: None,
            raw_values: [const { None }; Attribute::ALL.len()],
            diagnostics: Vec::new(),
        }
    }

    /// Replace the generation constants. Takes effect on the next
    /// regeneration.
    pub fn set_constants(&mut self, constants: GenerationConstants) {
        self.constants = constants;
    }

    /// Build the scene skeleton and run the first full generation.
    ///
    /// Attribute changes made before this point have already accumulated in
    /// the configuration; mounting turns them into descriptors.
    pub fn mount(&mut self) {
        if self.scene.is_none() {
            self.scene = Some(Scene::default());
        }
        self.regenerate_all();
    }

    /// Freeze all running animations in place. Descriptors are kept so a
    /// detached component can still be inspected; a later [`mount`]
    /// regenerates everything fresh.
    ///
    /// [`mount`]: Self::mount
    pub fn unmount(&mut self) {
        if let Some(scene) = &mut self.scene {
            scene.freeze();
        }
    }

    /// Feed one external attribute change through validation.
    ///
    /// Unknown names file a diagnostic and change nothing. A value identical
    /// to the previously observed raw value short-circuits entirely: no
    /// validation, no diagnostics, no regeneration.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let Some(attr) = Attribute::from_name(name) else {
            validate::report(
                &mut self.diagnostics,
                Diagnostic::UnknownAttribute {
                    name: name.to_string(),
                },
            );
            return;
        };

        if self.raw_values[attr.index()].as_deref() == Some(value) {
            return;
        }
        self.raw_values[attr.index()] = Some(value.to_string());

        self.apply(attr, value);
        self.regenerate_all();
    }

    /// Route a validated attribute to its typed setter.
    fn apply(&mut self, attr: Attribute, value: &str) {
        match attr {
            Attribute::Meteors => {
                self.config.meteors = validate::count(
                    value,
                    Configuration::DEFAULT_METEORS,
                    attr.name(),
                    &mut self.diagnostics,
                );
            }
            Attribute::Stars => {
                self.config.stars = validate::count(
                    value,
                    Configuration::DEFAULT_STARS,
                    attr.name(),
                    &mut self.diagnostics,
                );
            }
            Attribute::ShowBlackHole => {
                self.config.show_black_hole = validate::boolean(
                    value,
                    Configuration::DEFAULT_SHOW_BLACK_HOLE,
                    attr.name(),
                    &mut self.diagnostics,
                );
            }
            Attribute::TypeGradient => {
                self.config.type_gradient = validate::gradient(value, &mut self.diagnostics);
            }
        }
    }

    /// Set the meteor count, clamped to at least 1, reflecting the value
    /// into the attribute cache so an echoing attribute change is a no-op.
    pub fn update_meteors(&mut self, count: i64) {
        let count = count.clamp(1, i64::from(u32::MAX)) as u32;
        self.config.meteors = count;
        self.raw_values[Attribute::Meteors.index()] = Some(count.to_string());
        self.regenerate_all();
    }

    /// Set the star count, clamped to at least 1.
    pub fn update_stars(&mut self, count: i64) {
        let count = count.clamp(1, i64::from(u32::MAX)) as u32;
        self.config.stars = count;
        self.raw_values[Attribute::Stars.index()] = Some(count.to_string());
        self.regenerate_all();
    }

    /// Show or hide the black hole; `None` flips the current state.
    pub fn toggle_black_hole(&mut self, show: Option<bool>) {
        let show = show.unwrap_or(!self.config.show_black_hole);
        self.config.show_black_hole = show;
        self.raw_values[Attribute::ShowBlackHole.index()] = Some(show.to_string());
        self.regenerate_all();
    }

    /// Current meteor count.
    pub fn meteor_count(&self) -> u32 {
        self.config.meteors
    }

    /// Current star count.
    pub fn star_count(&self) -> u32 {
        self.config.stars
    }

    /// Whether the black hole is currently shown.
    pub fn has_black_hole(&self) -> bool {
        self.config.show_black_hole
    }

    /// Current gradient style.
    pub fn gradient_style(&self) -> GradientStyle {
        self.config.type_gradient
    }

    /// The generation constants in effect.
    pub fn constants(&self) -> &GenerationConstants {
        &self.constants
    }

    /// The current scene, once mounted.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Drain the queued validation diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Discard and resynthesise the star layer. Silently skipped while the
    /// scene skeleton does not exist yet.
    pub fn regenerate_stars(&mut self) {
        if self.scene.is_none() {
            return;
        }
        let mut stars = Vec::with_capacity(self.config.stars as usize);
        for _ in 0..self.config.stars {
            stars.push(factory::star(&mut self.rng, &self.constants));
        }
        if let Some(scene) = &mut self.scene {
            scene.stars = stars;
        }
    }

    /// Discard and resynthesise the meteor layer.
    pub fn regenerate_meteors(&mut self) {
        if self.scene.is_none() {
            return;
        }
        let mut meteors = Vec::with_capacity(self.config.meteors as usize);
        for _ in 0..self.config.meteors {
            meteors.push(factory::meteor(&mut self.rng, &self.constants));
        }
        if let Some(scene) = &mut self.scene {
            scene.meteors = meteors;
        }
    }

    /// Remove any existing black hole, then recreate it if it should be
    /// shown. Always a full remove-and-recreate so a toggled hole restarts
    /// its drift from the first keyframe.
    pub fn sync_black_hole(&mut self) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        scene.black_hole = None;
        if self.config.show_black_hole {
            scene.black_hole = Some(factory::black_hole());
        }
    }

    /// Rebuild every layer from one configuration snapshot.
    pub fn regenerate_all(&mut self) {
        if self.scene.is_none() {
            return;
        }
        self.regenerate_stars();
        self.regenerate_meteors();
        self.sync_black_hole();
        if let Some(scene) = &mut self.scene {
            scene.cycle += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(seed: u64) -> MeteorShower {
        let mut shower = MeteorShower::with_seed(seed);
        shower.mount();
        shower
    }

    #[test]
    fn mount_generates_the_default_layout() {
        let mut shower = mounted(1);
        let scene = shower.scene().unwrap();
        assert_eq!(scene.stars().len(), 300);
        assert_eq!(scene.meteors().len(), 30);
        assert!(scene.black_hole().is_none());
        assert_eq!(scene.cycle(), 1);
        assert!(shower.take_diagnostics().is_empty());
    }

    #[test]
    fn premount_attribute_changes_accumulate_without_a_scene() {
        let mut shower = MeteorShower::with_seed(1);
        shower.set_attribute("meteors", "5");
        shower.set_attribute("stars", "50");
        assert!(shower.scene().is_none());
        assert_eq!(shower.meteor_count(), 5);
        assert_eq!(shower.star_count(), 50);

        shower.mount();
        let scene = shower.scene().unwrap();
        assert_eq!(scene.meteors().len(), 5);
        assert_eq!(scene.stars().len(), 50);
    }

    #[test]
    fn full_configuration_end_to_end() {
        let mut shower = MeteorShower::with_seed(9);
        shower.set_attribute("meteors", "5");
        shower.set_attribute("stars", "50");
        shower.set_attribute("show_black_hole", "true");
        shower.set_attribute("type_gradient", "linear");
        shower.mount();

        let scene = shower.scene().unwrap();
        assert_eq!(scene.meteors().len(), 5);
        assert_eq!(scene.stars().len(), 50);
        assert!(scene.black_hole().is_some());
        assert_eq!(shower.gradient_style(), GradientStyle::Linear);
        assert!(shower.take_diagnostics().is_empty());
    }

    #[test]
    fn regeneration_replaces_rather_than_accumulates() {
        let mut shower = mounted(2);
        shower.regenerate_stars();
        shower.regenerate_stars();
        assert_eq!(shower.scene().unwrap().stars().len(), 300);

        shower.set_attribute("stars", "10");
        assert_eq!(shower.scene().unwrap().stars().len(), 10);
        shower.regenerate_all();
        assert_eq!(shower.scene().unwrap().stars().len(), 10);
    }

    #[test]
    fn negative_count_clamps_without_a_diagnostic() {
        let mut shower = mounted(3);
        shower.set_attribute("meteors", "-3");
        assert_eq!(shower.meteor_count(), 1);
        assert_eq!(shower.scene().unwrap().meteors().len(), 1);
        assert!(shower.take_diagnostics().is_empty());
    }

    #[test]
    fn unparseable_count_defaults_with_a_diagnostic() {
        let mut shower = mounted(3);
        shower.set_attribute("stars", "a lot");
        assert_eq!(shower.star_count(), 300);
        assert_eq!(shower.take_diagnostics().len(), 1);
    }

    #[test]
    fn invalid_gradient_falls_back_to_radial() {
        let mut shower = mounted(4);
        shower.set_attribute("type_gradient", "diagonal");
        assert_eq!(shower.gradient_style(), GradientStyle::Radial);
        assert_eq!(shower.take_diagnostics().len(), 1);
    }

    #[test]
    fn unknown_attribute_changes_nothing() {
        let mut shower = mounted(5);
        let before_cycle = shower.scene().unwrap().cycle();
        shower.set_attribute("comets", "12");
        assert_eq!(shower.meteor_count(), 30);
        assert_eq!(shower.scene().unwrap().cycle(), before_cycle);
        let diags = shower.take_diagnostics();
        assert_eq!(diags.len(), 1);
        assert!(matches!(&diags[0], Diagnostic::UnknownAttribute { name } if name == "comets"));
    }

    #[test]
    fn repeated_raw_value_is_a_complete_no_op() {
        let mut shower = mounted(6);
        shower.set_attribute("meteors", "8");
        let cycle = shower.scene().unwrap().cycle();
        shower.take_diagnostics();

        shower.set_attribute("meteors", "8");
        assert_eq!(shower.scene().unwrap().cycle(), cycle);
        assert!(shower.take_diagnostics().is_empty());

        // Even an invalid value only reports once.
        shower.set_attribute("type_gradient", "conic");
        assert_eq!(shower.take_diagnostics().len(), 1);
        shower.set_attribute("type_gradient", "conic");
        assert!(shower.take_diagnostics().is_empty());
    }

    #[test]
    fn toggling_the_black_hole_recreates_it() {
        let mut shower = mounted(7);
        shower.set_attribute("show_black_hole", "true");
        let first_cycle = shower.scene().unwrap().cycle();
        assert!(shower.scene().unwrap().black_hole().is_some());

        shower.set_attribute("show_black_hole", "false");
        assert!(shower.scene().unwrap().black_hole().is_none());

        shower.set_attribute("show_black_hole", "true");
        let scene = shower.scene().unwrap();
        let hole = scene.black_hole().unwrap();
        // Two regenerations later: this is a fresh descriptor with its drift
        // loop back at the first keyframe, not the original made visible.
        assert_eq!(scene.cycle(), first_cycle + 2);
        assert!(hole.drift.is_some());
    }

    #[test]
    fn public_operations_reflect_and_regenerate() {
        let mut shower = mounted(8);
        shower.update_meteors(-4);
        assert_eq!(shower.meteor_count(), 1);
        shower.update_stars(12);
        assert_eq!(shower.scene().unwrap().stars().len(), 12);

        // The reflected raw value makes the echoing attribute change a no-op.
        let cycle = shower.scene().unwrap().cycle();
        shower.set_attribute("stars", "12");
        assert_eq!(shower.scene().unwrap().cycle(), cycle);

        shower.toggle_black_hole(None);
        assert!(shower.has_black_hole());
        shower.toggle_black_hole(None);
        assert!(!shower.has_black_hole());
        shower.toggle_black_hole(Some(true));
        assert!(shower.scene().unwrap().black_hole().is_some());
    }

    #[test]
    fn unmount_freezes_animations_in_place() {
        let mut shower = mounted(10);
        shower.toggle_black_hole(Some(true));
        shower.unmount();

        let scene = shower.scene().unwrap();
        assert_eq!(scene.stars().len(), 300);
        assert!(scene.stars().iter().all(|s| s.twinkle_delay_s.is_none()));
        assert!(scene.meteors().iter().all(|m| m.animation.is_none()));
        assert!(scene.black_hole().unwrap().drift.is_none());

        // Remounting rebuilds live descriptors.
        shower.mount();
        let scene = shower.scene().unwrap();
        assert!(scene.stars().iter().all(|s| s.twinkle_delay_s.is_some()));
        assert!(scene.meteors().iter().all(|m| m.animation.is_some()));
    }

    #[test]
    fn identical_seeds_generate_identical_scenes() {
        let mut a = mounted(42);
        let mut b = mounted(42);
        a.set_attribute("meteors", "5");
        b.set_attribute("meteors", "5");
        assert_eq!(a.scene().unwrap().stars(), b.scene().unwrap().stars());
        assert_eq!(a.scene().unwrap().meteors(), b.scene().unwrap().meteors());
    }
}
