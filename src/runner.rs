//! Drives one cuboid layout through a scene file: ready, scripted resizes,
//! appearance, report.

use crate::config::{ResizeStep, SceneConfig, SceneError};
use cuboid_layout_core::{LayoutPass, MaterialHandle, RectHandle, SlabTemplate};
use cuboid_layout_ui3d::{
    CuboidLayoutConfig, CuboidManager, CuboidSnapshot, LayoutHandle, RectTransform, RetainedScene,
    SlabKind,
};
use glam::{Vec2, Vec3};
use serde::Serialize;

/// Slab object as the scene sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub node: u64,
    pub parent: u64,
    pub template: String,
    pub material: Option<u64>,
}

/// Everything the CLI prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub layout: CuboidSnapshot,
    pub nodes: Vec<NodeReport>,
}

pub struct SceneRun {
    manager: CuboidManager<RetainedScene>,
    layout: LayoutHandle,
    standard: Vec<RectHandle>,
    highlight: Vec<RectHandle>,
}

impl SceneRun {
    /// Build the rects and the (not yet ready) layout described by `config`.
    pub fn build(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;

        let mut manager = CuboidManager::new(RetainedScene::new());
        let mut add_rects = |kind: SlabKind| -> Vec<RectHandle> {
            config
                .rects(kind)
                .iter()
                .map(|rect| {
                    manager.add_rect(
                        RectTransform::new(rect.size[0], rect.size[1])
                            .with_pivot(rect.pivot[0], rect.pivot[1])
                            .with_local_position(Vec3::from_array(rect.position)),
                    )
                })
                .collect()
        };
        let standard = add_rects(SlabKind::Standard);
        let highlight = add_rects(SlabKind::Highlight);

        let layout = manager.add_layout(
            CuboidLayoutConfig::new(
                SlabTemplate::new(config.standard_template.as_str()),
                SlabTemplate::new(config.highlight_template.as_str()),
            )
            .with_rects(standard.iter().copied())
            .with_highlight_rects(highlight.iter().copied()),
        );

        Ok(Self {
            manager,
            layout,
            standard,
            highlight,
        })
    }

    /// Fire the ready signal.
    pub fn ready(&mut self) -> LayoutPass {
        self.manager.ready(self.layout);
        self.passes()
    }

    /// Apply one scripted dimension change. Returns how many layouts re-ran.
    pub fn apply(&mut self, step: &ResizeStep) -> Result<usize, SceneError> {
        let handles = match step.target {
            SlabKind::Standard => &self.standard,
            SlabKind::Highlight => &self.highlight,
        };
        let rect = *handles.get(step.index).ok_or_else(|| {
            SceneError::Invalid(format!(
                "no {} rect at index {}",
                step.target.as_str(),
                step.index
            ))
        })?;

        let mut passes = 0;
        if let Some(size) = step.size {
            passes += self.manager.resize_rect(rect, Vec2::from_array(size));
        }
        if let Some(pivot) = step.pivot {
            passes += self.manager.set_rect_pivot(rect, Vec2::from_array(pivot));
        }
        Ok(passes)
    }

    pub fn set_appearance(&mut self, material: MaterialHandle) {
        self.manager.set_appearance(self.layout, material);
    }

    pub fn passes(&self) -> LayoutPass {
        self.manager
            .layout(self.layout)
            .map_or(LayoutPass::ZERO, |layout| layout.passes())
    }

    pub fn report(&self) -> SceneReport {
        let layout = self
            .manager
            .layout(self.layout)
            .map(|layout| layout.snapshot(self.manager.rects()))
            .unwrap_or(CuboidSnapshot {
                ready: false,
                passes: 0,
                standard: Vec::new(),
                highlight: Vec::new(),
            });

        let nodes = self
            .manager
            .scene()
            .iter()
            .map(|(node, entry)| NodeReport {
                node: node.0,
                parent: entry.parent.0,
                template: entry.template.name().to_string(),
                material: entry.material.map(|m| m.0),
            })
            .collect();

        SceneReport { layout, nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RectConfig;
    use cuboid_layout_testkit::{assert_vec3_near, LAYOUT_EPSILON};

    #[test]
    fn default_scene_matches_reference_geometry() {
        let mut run = SceneRun::build(&SceneConfig::default()).expect("valid scene");
        assert_eq!(run.ready(), LayoutPass(1));

        let report = run.report();
        let standard = &report.layout.standard[0];
        assert_vec3_near(
            Vec3::from_array(standard.position),
            Vec3::new(50.005, 25.0, 0.00255),
            LAYOUT_EPSILON,
        );
        assert_vec3_near(
            Vec3::from_array(standard.scale),
            Vec3::new(100.01, 50.0, 0.004),
            LAYOUT_EPSILON,
        );
        assert_eq!(standard.rect_position.map(|p| p[2]), Some(-0.004));

        let highlight = &report.layout.highlight[0];
        assert_eq!(highlight.scale, [100.0, 50.0, 0.004]);
        assert_vec3_near(
            Vec3::from_array(highlight.position),
            Vec3::new(50.0, 25.0, 0.00255),
            LAYOUT_EPSILON,
        );
    }

    #[test]
    fn scripted_resize_and_appearance() {
        let config = SceneConfig {
            material: Some(9),
            standard: vec![RectConfig {
                size: [10.0, 10.0],
                ..RectConfig::default()
            }],
            resize: vec![ResizeStep {
                target: SlabKind::Standard,
                index: 0,
                size: Some([20.0, 10.0]),
                pivot: Some([0.0, 0.5]),
            }],
            ..SceneConfig::default()
        };
        let mut run = SceneRun::build(&config).expect("valid scene");
        run.ready();
        assert_eq!(run.apply(&config.resize[0]).expect("step applies"), 2);
        assert_eq!(run.passes(), LayoutPass(3));
        run.set_appearance(MaterialHandle(9));

        let report = run.report();
        let standard = &report.layout.standard[0];
        assert_vec3_near(
            Vec3::from_array(standard.position),
            Vec3::new(10.005, 0.0, 0.00255),
            LAYOUT_EPSILON,
        );
        let materials: Vec<_> = report.nodes.iter().map(|n| n.material).collect();
        assert_eq!(materials, vec![Some(9), None]);
        assert_eq!(report.nodes[0].template, "backing_cube");
    }

    #[test]
    fn invalid_step_index_is_rejected() {
        let mut run = SceneRun::build(&SceneConfig::default()).expect("valid scene");
        let step = ResizeStep {
            target: SlabKind::Highlight,
            index: 3,
            size: Some([1.0, 1.0]),
            pivot: None,
        };
        assert!(run.apply(&step).is_err());
    }

    #[test]
    fn report_before_ready_is_empty() {
        let run = SceneRun::build(&SceneConfig::default()).expect("valid scene");
        let report = run.report();
        assert!(!report.layout.ready);
        assert!(report.nodes.is_empty());
        assert_eq!(run.passes(), LayoutPass::ZERO);
    }
}
