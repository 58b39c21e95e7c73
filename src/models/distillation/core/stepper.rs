//! Graphical stage stepping.
//!
//! Starting from `(x_d, x_d)` (total condenser), each stage steps horizontally
//! onto the equilibrium curve and then vertically onto the active operating
//! line. Stepping uses the rectifying line until the liquid composition first
//! falls below the feed intersection, then switches permanently to the
//! stripping line; the stage where that happens is the feed stage.

use crate::support::equilibrium::EquilibriumCurve;

use super::{OperatingLines, Section, Stage, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SteppingRectifying,
    SteppingStripping,
    Terminated(Termination),
}

/// Stage-by-stage state machine, yielding each [`Stage`] as it is stepped.
pub(super) struct StageStepper<'a, C> {
    curve: &'a C,
    lines: &'a OperatingLines,
    x_limit: f64,
    max_stages: usize,
    state: State,
    x: f64,
    y: f64,
    index: usize,
    feed_stage: Option<usize>,
}

/// Counts accumulated by a finished [`StageStepper`].
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Stepping {
    pub(super) stages: Vec<Stage>,
    pub(super) rectifying: usize,
    pub(super) stripping: usize,
    pub(super) feed_stage: usize,
    pub(super) termination: Termination,
}

impl<'a, C: EquilibriumCurve> StageStepper<'a, C> {
    /// Starts stepping at `(x_distillate, x_distillate)`.
    ///
    /// Stepping stops once `x <= x_bottoms · (1 + bottoms_tolerance)` or after
    /// `max_stages` stages.
    pub(super) fn new(
        curve: &'a C,
        lines: &'a OperatingLines,
        x_distillate: f64,
        x_bottoms: f64,
        bottoms_tolerance: f64,
        max_stages: usize,
    ) -> Self {
        Self {
            curve,
            lines,
            x_limit: x_bottoms * (1.0 + bottoms_tolerance),
            max_stages,
            state: State::SteppingRectifying,
            x: x_distillate,
            y: x_distillate,
            index: 0,
            feed_stage: None,
        }
    }

    /// Steps every stage and returns the counts.
    pub(super) fn run(mut self) -> Stepping {
        let stages: Vec<Stage> = self.by_ref().collect();

        let stripping = stages
            .iter()
            .filter(|stage| stage.section == Section::Stripping)
            .count();
        let rectifying = stages.len() - stripping;

        let termination = match self.state {
            State::Terminated(termination) => termination,
            State::SteppingRectifying | State::SteppingStripping => Termination::Converged,
        };

        Stepping {
            stages,
            rectifying,
            stripping,
            // Never switched: the feed enters below the last rectifying stage.
            feed_stage: self.feed_stage.unwrap_or(rectifying),
            termination,
        }
    }

    fn section(&self) -> Option<Section> {
        match self.state {
            State::SteppingRectifying => Some(Section::Rectifying),
            State::SteppingStripping => Some(Section::Stripping),
            State::Terminated(_) => None,
        }
    }
}

impl<C: EquilibriumCurve> Iterator for StageStepper<'_, C> {
    type Item = Stage;

    fn next(&mut self) -> Option<Stage> {
        let mut section = self.section()?;

        if self.x <= self.x_limit {
            self.state = State::Terminated(Termination::Converged);
            return None;
        }
        if self.index >= self.max_stages {
            self.state = State::Terminated(Termination::StageLimitReached);
            return None;
        }

        self.index += 1;
        let x_new = self.curve.to_liquid(self.y);

        if section == Section::Rectifying && x_new < self.lines.feed_intersection.x {
            section = Section::Stripping;
            self.state = State::SteppingStripping;
            self.feed_stage = Some(self.index);
        }

        let y_new = self.lines.line(section).vapor_at(x_new);

        let stage = Stage {
            index: self.index,
            section,
            x_liquid: x_new,
            y_vapor: self.y,
            x_next: self.x,
            y_next: y_new,
        };

        self.x = x_new;
        self.y = y_new;

        Some(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::distillation::core::{DesignSpec, FeedLine};
    use crate::support::{
        equilibrium::RelativeVolatility,
        fallback::FallbackPolicy,
    };
    use approx::assert_relative_eq;

    fn lines(spec: &DesignSpec, reflux: f64) -> OperatingLines {
        OperatingLines::build(
            spec,
            reflux,
            &FeedLine::new(spec.q_factor, spec.x_feed),
            &FallbackPolicy::default(),
            &mut Vec::new(),
        )
    }

    #[test]
    fn steps_default_column() {
        let spec = DesignSpec::default();
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        let lines = lines(&spec, 1.360_871_4);

        let stepping = StageStepper::new(&curve, &lines, 0.95, 0.05, 0.01, 50).run();

        assert_eq!(stepping.rectifying, 6);
        assert_eq!(stepping.stripping, 9);
        assert_eq!(stepping.feed_stage, 7);
        assert_eq!(stepping.termination, Termination::Converged);
        assert_eq!(stepping.stages.len(), 15);
    }

    #[test]
    fn stages_chain_and_switch_once() {
        let spec = DesignSpec::default();
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        let lines = lines(&spec, 2.0);

        let stepping = StageStepper::new(&curve, &lines, 0.95, 0.05, 0.01, 50).run();
        let stages = &stepping.stages;

        assert_relative_eq!(stages[0].x_next, 0.95);
        assert_relative_eq!(stages[0].y_vapor, 0.95);
        for (i, pair) in stages.windows(2).enumerate() {
            assert_eq!(pair[0].index, i + 1);
            assert_relative_eq!(pair[1].x_next, pair[0].x_liquid);
            assert_relative_eq!(pair[1].y_vapor, pair[0].y_next);
            assert!(pair[1].x_liquid < pair[0].x_liquid);
        }

        let switches = stages
            .windows(2)
            .filter(|pair| pair[0].section != pair[1].section)
            .count();
        assert_eq!(switches, 1);
        assert_eq!(stages[stepping.feed_stage - 1].section, Section::Stripping);
        assert_eq!(stages[stepping.feed_stage - 2].section, Section::Rectifying);

        let last = stages.last().unwrap();
        assert!(last.x_liquid <= 0.05 * 1.01);
    }

    #[test]
    fn each_stage_lies_on_equilibrium_curve() {
        let spec = DesignSpec::default();
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        let lines = lines(&spec, 2.0);

        for stage in StageStepper::new(&curve, &lines, 0.95, 0.05, 0.01, 50) {
            assert_relative_eq!(curve.to_vapor(stage.x_liquid), stage.y_vapor, epsilon = 1e-12);
        }
    }

    #[test]
    fn stage_limit_is_reported() {
        let spec = DesignSpec::default();
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        let lines = lines(&spec, 2.0);

        let stepping = StageStepper::new(&curve, &lines, 0.95, 0.05, 0.01, 5).run();

        assert_eq!(stepping.stages.len(), 5);
        assert_eq!(stepping.termination, Termination::StageLimitReached);
        assert_eq!(stepping.rectifying + stepping.stripping, 5);
    }
}
