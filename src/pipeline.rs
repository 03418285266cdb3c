use tracing::{info, warn};

use crate::config::FramingConfig;
use crate::error::{FramingError, Result};
use crate::framing::{
    FrameCollector, FrameSegment, FrameStore, MemberRole, PanelId, ProfileId, WallId, WallOutline,
};
use crate::geometry::Segment;
use crate::host::{FrameHost, FramingModel, MemberRequest};
use crate::operations::assembly::AssembleFrames;
use crate::operations::generation::BuildPanel;

/// A wall whose panel was dropped from the run.
#[derive(Debug)]
pub struct PanelFailure {
    pub wall: WallId,
    pub error: FramingError,
}

/// Totals of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub panels: usize,
    pub frames: usize,
    pub failures: Vec<PanelFailure>,
}

/// Batch driver: frames every wall of a model and publishes the result to
/// the host.
///
/// Runs in two phases. Each wall is generated and its members placed in
/// turn; a wall that fails is dropped and reported without stopping the
/// others. Once every wall is done the collected panels are frozen and the
/// assembly pass names, numbers and rotates all members together.
pub struct FramingRun<'a, M: FramingModel> {
    model: &'a M,
    config: &'a FramingConfig,
}

impl<'a, M: FramingModel> FramingRun<'a, M> {
    /// Creates a new `FramingRun`.
    #[must_use]
    pub fn new(model: &'a M, config: &'a FramingConfig) -> Self {
        Self { model, config }
    }

    /// Executes the run against `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the host cannot list
    /// its walls, or the host rejects an annotation or filter. Failures of
    /// individual walls are reported in [`RunSummary::failures`] instead.
    pub fn execute<H: FrameHost>(&self, host: &mut H) -> Result<RunSummary> {
        self.config.validate()?;
        let walls = self.model.walls()?;
        info!(
            walls = walls.len(),
            spacing_cm = self.config.stud_spacing_cm,
            "starting framing run"
        );

        let (store, failures) = self.generate(&walls, host);

        let assembly = AssembleFrames::new(&store, self.config).execute()?;
        for member in &assembly.members {
            host.annotate_member(member.member, &member.annotation)?;
        }
        for filter in assembly.filters(&self.config.filter_prefix) {
            host.apply_panel_filter(&filter)?;
        }

        let summary = RunSummary {
            panels: store.panel_count(),
            frames: store.segment_count(),
            failures,
        };
        info!(
            panels = summary.panels,
            frames = summary.frames,
            failed = summary.failures.len(),
            "framing run complete"
        );
        Ok(summary)
    }

    /// First phase: builds and places every wall's panel.
    pub fn generate<H: FrameHost>(
        &self,
        walls: &[WallOutline],
        host: &mut H,
    ) -> (FrameStore, Vec<PanelFailure>) {
        let mut collector = FrameCollector::new();
        let mut failures = Vec::new();

        for wall in walls {
            if let Err(error) = self.frame_wall(wall, host, &mut collector) {
                warn!(wall = %wall.id(), %error, "dropping panel");
                failures.push(PanelFailure {
                    wall: wall.id().clone(),
                    error,
                });
            }
        }

        (collector.finish(), failures)
    }

    fn frame_wall<H: FrameHost>(
        &self,
        wall: &WallOutline,
        host: &mut H,
        collector: &mut FrameCollector,
    ) -> Result<PanelId> {
        let openings = self.model.openings(wall.id());
        let adjacency = self.model.adjacency(wall.id());
        let panel = BuildPanel::new(wall, &openings, &adjacency, self.config).execute()?;

        let members: Vec<_> = panel
            .curves()
            .into_iter()
            .map(|(role, curve)| (role, curve.clone(), panel.profile(role).clone()))
            .collect();
        let panel_id = collector.add_panel(panel);

        if let Err(error) = Self::place_members(wall, panel_id, members, host, collector) {
            collector.withdraw_panel(panel_id);
            return Err(error);
        }
        Ok(panel_id)
    }

    fn place_members<H: FrameHost>(
        wall: &WallOutline,
        panel: PanelId,
        members: Vec<(MemberRole, Segment, ProfileId)>,
        host: &mut H,
        collector: &mut FrameCollector,
    ) -> Result<()> {
        for (role, curve, profile) in members {
            let member = host.place_member(&MemberRequest {
                wall: wall.id(),
                level: wall.level(),
                curve: &curve,
                role,
                profile: &profile,
                join_ends: false,
            })?;
            collector.add_segment(FrameSegment {
                cut_length: curve.length(),
                curve,
                role,
                profile,
                member,
                panel,
                host_wall: wall.id().clone(),
            })?;
        }
        Ok(())
    }
}
