//! Cuboid Layout Component - Keeps backing and highlight slabs fitted to their rects

use super::cuboid::{fit_slab, SlabKind};
use super::snapshot::{CuboidSnapshot, SlabSnapshot};
use crate::components::SlabDescriptor;
use crate::scene::SlabScene;
use crate::store::RectStore;
use cuboid_layout_core::{LayoutPass, MaterialHandle, RectHandle, SlabTemplate};
use tracing::{debug, trace, warn};

/// Construction-time configuration for a [`CuboidLayout`]
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidLayoutConfig {
    /// Rectangles that get a standard backing slab, in order
    pub rect_sources: Vec<RectHandle>,
    /// Rectangles that get a highlight slab, in order
    pub highlight_rect_sources: Vec<RectHandle>,
    /// Template used to create standard slabs
    pub slab_template: SlabTemplate,
    /// Template used to create highlight slabs
    pub highlight_slab_template: SlabTemplate,
}

impl CuboidLayoutConfig {
    /// Create an empty configuration with the given templates
    pub fn new(slab_template: SlabTemplate, highlight_slab_template: SlabTemplate) -> Self {
        Self {
            rect_sources: Vec::new(),
            highlight_rect_sources: Vec::new(),
            slab_template,
            highlight_slab_template,
        }
    }

    /// Builder: Set the rectangles backed by standard slabs
    pub fn with_rects(mut self, rects: impl IntoIterator<Item = RectHandle>) -> Self {
        self.rect_sources = rects.into_iter().collect();
        self
    }

    /// Builder: Set the rectangles backed by highlight slabs
    pub fn with_highlight_rects(mut self, rects: impl IntoIterator<Item = RectHandle>) -> Self {
        self.highlight_rect_sources = rects.into_iter().collect();
        self
    }

    /// Every rectangle this layout observes, standard sources first.
    pub fn observed_rects(&self) -> impl Iterator<Item = RectHandle> + '_ {
        self.rect_sources
            .iter()
            .chain(self.highlight_rect_sources.iter())
            .copied()
    }
}

/// Slabs created on ready, one per source rectangle.
#[derive(Debug, Clone)]
struct SlabSet {
    standard: Vec<SlabDescriptor>,
    highlight: Vec<SlabDescriptor>,
}

/// Backs a set of rectangles with extruded slabs.
///
/// Nothing happens until [`CuboidLayout::on_ready`] creates the slabs. From
/// then on every dimension change re-fits all of them in one full pass.
#[derive(Debug, Clone)]
pub struct CuboidLayout {
    config: CuboidLayoutConfig,
    slabs: Option<SlabSet>,
    passes: LayoutPass,
}

impl CuboidLayout {
    /// Create a layout. No slabs exist until [`CuboidLayout::on_ready`].
    pub fn new(config: CuboidLayoutConfig) -> Self {
        Self {
            config,
            slabs: None,
            passes: LayoutPass::ZERO,
        }
    }

    /// Create one slab per source rectangle, then run the initial pass.
    pub fn on_ready<S: SlabScene + ?Sized>(&mut self, rects: &mut RectStore, scene: &mut S) {
        if self.slabs.is_some() {
            warn!("cuboid layout is already initialized; ignoring ready signal");
            return;
        }

        let standard = instantiate_slabs(
            &self.config.rect_sources,
            &self.config.slab_template,
            SlabKind::Standard,
            scene,
        );
        let highlight = instantiate_slabs(
            &self.config.highlight_rect_sources,
            &self.config.highlight_slab_template,
            SlabKind::Highlight,
            scene,
        );
        debug!(
            standard = standard.len(),
            highlight = highlight.len(),
            "instantiated cuboid slabs"
        );

        self.slabs = Some(SlabSet {
            standard,
            highlight,
        });
        self.update_cubes(rects, scene);
    }

    /// Re-fit every slab after an observed rectangle changed size or pivot.
    ///
    /// Returns `false` when the layout is not ready yet.
    pub fn on_dimensions_changed<S: SlabScene + ?Sized>(
        &mut self,
        rects: &mut RectStore,
        scene: &mut S,
    ) -> bool {
        self.update_cubes(rects, scene)
    }

    /// Run a full layout pass over both slab collections.
    ///
    /// Returns `false` without touching anything if the slabs have not been
    /// created yet.
    pub fn update_cubes<S: SlabScene + ?Sized>(&mut self, rects: &mut RectStore, scene: &mut S) -> bool {
        let Some(slabs) = self.slabs.as_mut() else {
            trace!("cuboid layout not ready; skipping pass");
            return false;
        };

        let standard = fit_collection(&mut slabs.standard, rects, scene);
        let highlight = fit_collection(&mut slabs.highlight, rects, scene);
        self.passes = self.passes.next();

        debug!(pass = self.passes.0, standard, highlight, "recomputed cuboid slabs");
        true
    }

    /// Set a shared material on all standard slabs. Highlight slabs keep
    /// theirs. Does nothing before the slabs exist.
    pub fn set_appearance<S: SlabScene + ?Sized>(&self, material: MaterialHandle, scene: &mut S) {
        let Some(slabs) = self.slabs.as_ref() else {
            trace!("cuboid layout not ready; ignoring appearance change");
            return;
        };

        for slab in &slabs.standard {
            scene.set_shared_material(slab.node, material);
        }
    }

    /// Whether the slabs have been created
    pub fn is_ready(&self) -> bool {
        self.slabs.is_some()
    }

    /// Construction config
    pub fn config(&self) -> &CuboidLayoutConfig {
        &self.config
    }

    /// Number of completed layout passes
    pub fn passes(&self) -> LayoutPass {
        self.passes
    }

    /// Standard slabs, index-aligned with `config().rect_sources`
    pub fn standard_slabs(&self) -> &[SlabDescriptor] {
        match &self.slabs {
            Some(slabs) => slabs.standard.as_slice(),
            None => &[],
        }
    }

    /// Highlight slabs, index-aligned with `config().highlight_rect_sources`
    pub fn highlight_slabs(&self) -> &[SlabDescriptor] {
        match &self.slabs {
            Some(slabs) => slabs.highlight.as_slice(),
            None => &[],
        }
    }

    /// Serializable view of every slab and the rect it backs.
    pub fn snapshot(&self, rects: &RectStore) -> CuboidSnapshot {
        let entries = |slabs: &[SlabDescriptor]| -> Vec<SlabSnapshot> {
            slabs
                .iter()
                .map(|slab| SlabSnapshot::capture(slab, rects.get(slab.parent)))
                .collect()
        };

        CuboidSnapshot {
            ready: self.is_ready(),
            passes: self.passes.0,
            standard: entries(self.standard_slabs()),
            highlight: entries(self.highlight_slabs()),
        }
    }
}

fn instantiate_slabs<S: SlabScene + ?Sized>(
    sources: &[RectHandle],
    template: &SlabTemplate,
    kind: SlabKind,
    scene: &mut S,
) -> Vec<SlabDescriptor> {
    sources
        .iter()
        .map(|&parent| SlabDescriptor::new(scene.instantiate(template, parent), parent, kind))
        .collect()
}

fn fit_collection<S: SlabScene + ?Sized>(
    slabs: &mut [SlabDescriptor],
    rects: &mut RectStore,
    scene: &mut S,
) -> usize {
    let mut fitted = 0;
    for slab in slabs.iter_mut() {
        let Some(rect) = rects.get_mut(slab.parent) else {
            warn!(rect = %slab.parent, node = %slab.node, "slab parent is gone; keeping last transform");
            continue;
        };

        fit_slab(rect, &mut slab.transform, slab.kind.padding());
        scene.write_transform(slab.node, &slab.transform);
        fitted += 1;
    }
    fitted
}
