mod naming;
mod numbering;
mod palette;
mod rotation;

pub use naming::panel_name;
pub use numbering::{label_by_length, FrameLabel};
pub use palette::{PanelPalette, Rgb, PALETTE};
pub use rotation::RotationRule;

use slotmap::SecondaryMap;
use tracing::debug;

use crate::config::FramingConfig;
use crate::error::{ModelError, Result};
use crate::framing::{FrameStore, MemberHandle, PanelId, SegmentId};
use crate::host::{MemberAnnotation, PanelFilter};

/// A member together with the parameters assigned by the assembly pass.
#[derive(Debug, Clone)]
pub struct AnnotatedMember {
    pub segment: SegmentId,
    pub member: MemberHandle,
    pub label: FrameLabel,
    pub annotation: MemberAnnotation,
}

/// Output of the cross-panel pass.
#[derive(Debug)]
pub struct Assembly {
    /// Members in numbering order (shortest first).
    pub members: Vec<AnnotatedMember>,
    pub panel_names: SecondaryMap<PanelId, String>,
    pub palette: PanelPalette,
}

impl Assembly {
    /// One visible filter per distinct panel name, in palette order.
    #[must_use]
    pub fn filters(&self, prefix: &str) -> Vec<PanelFilter> {
        self.palette
            .entries()
            .map(|(name, color)| PanelFilter {
                name: format!("{prefix}{name}"),
                panel_name: name.to_owned(),
                color,
                visible: true,
            })
            .collect()
    }
}

/// Names panels, numbers members by cut length and rotates their sections.
///
/// Needs the finished [`FrameStore`], since numbering spans every panel.
pub struct AssembleFrames<'a> {
    store: &'a FrameStore,
    rule: RotationRule,
}

impl<'a> AssembleFrames<'a> {
    /// Creates a new `AssembleFrames` operation.
    #[must_use]
    pub fn new(store: &'a FrameStore, config: &FramingConfig) -> Self {
        Self {
            store,
            rule: RotationRule::from_config(config),
        }
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if a member refers to a panel
    /// that is not in the store.
    pub fn execute(&self) -> Result<Assembly> {
        let mut panel_names = SecondaryMap::new();
        let mut palette = PanelPalette::new();
        for (id, panel) in self.store.panels() {
            let mut infill = 0;
            for segment in panel.segments() {
                if !self.store.segment(*segment)?.role.is_boundary() {
                    infill += 1;
                }
            }
            let name = panel_name(infill, panel.wall.length_cm(), panel.has_openings());
            palette.color_for(&name);
            panel_names.insert(id, name);
        }

        let lengths: Vec<(SegmentId, f64)> = self
            .store
            .segments()
            .map(|(id, segment)| (id, segment.cut_length))
            .collect();

        let mut members = Vec::with_capacity(lengths.len());
        for (id, label) in label_by_length(&lengths) {
            let segment = self.store.segment(id)?;
            let panel = self.store.panel(segment.panel)?;
            let panel_name = panel_names
                .get(segment.panel)
                .cloned()
                .ok_or_else(|| ModelError::EntityNotFound("panel name".into()))?;

            members.push(AnnotatedMember {
                segment: id,
                member: segment.member,
                label,
                annotation: MemberAnnotation {
                    host_wall: segment.host_wall.clone(),
                    panel_name,
                    frame_number: label.to_string(),
                    rotation: self.rule.rotation(&segment.curve, panel.wall.orientation()),
                },
            });
        }

        debug!(
            panels = panel_names.len(),
            members = members.len(),
            part_numbers = members.last().map_or(0, |m| m.label.0),
            "assembled frames"
        );
        Ok(Assembly {
            members,
            panel_names,
            palette,
        })
    }
}
