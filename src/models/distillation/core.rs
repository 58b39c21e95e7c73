//! McCabe-Thiele design of a binary distillation column.
//!
//! The design is a pure function of a [`DesignSpec`] and an equilibrium curve:
//! material balance, feed-line pinch and minimum reflux, operating lines, and
//! finally graphical stage stepping.

mod config;
mod diagram;
mod error;
mod feed_line;
mod input;
mod material_balance;
mod min_reflux;
mod operating_lines;
mod results;
mod stepper;

pub use config::DesignConfig;
pub use diagram::McCabeThieleDiagram;
pub use error::DesignError;
pub use feed_line::FeedLine;
pub use input::{DesignSpec, FeedCondition};
pub use material_balance::MaterialBalance;
pub use min_reflux::MinimumReflux;
pub use operating_lines::{OperatingLine, OperatingLines, Section};
pub use results::{DesignResult, InternalFlows, Stage, Termination};

use crate::support::{equilibrium::EquilibriumCurve, fallback::Warning};

use min_reflux::minimum_reflux;
use stepper::StageStepper;

/// Computes a complete design.
///
/// # Errors
///
/// Returns [`DesignError`] if the specification is invalid. Numerical
/// fallbacks do not fail; they are listed in [`DesignResult::warnings`].
pub fn design(
    spec: &DesignSpec,
    curve: &impl EquilibriumCurve,
    config: &DesignConfig,
) -> Result<DesignResult, DesignError> {
    spec.validate()?;
    let balance = MaterialBalance::new(spec)?;

    let mut warnings = Vec::new();

    let feed_line = FeedLine::new(spec.q_factor, spec.x_feed);
    let min = minimum_reflux(
        spec,
        &feed_line,
        curve,
        &config.root,
        &config.fallbacks,
        &mut warnings,
    );
    let reflux = spec.reflux_factor * min.ratio;

    let lines = OperatingLines::build(spec, reflux, &feed_line, &config.fallbacks, &mut warnings);

    let stepping = StageStepper::new(
        curve,
        &lines,
        spec.x_distillate,
        spec.x_bottoms,
        config.bottoms_tolerance,
        config.max_stages,
    )
    .run();

    if stepping.termination == Termination::StageLimitReached {
        Warning::StageLimitReached {
            max_stages: config.max_stages,
        }
        .report(&mut warnings);
    }

    log::debug!(
        "design: R_min={:.4}, R={:.4}, stages={}+{}, feed stage {}",
        min.ratio,
        reflux,
        stepping.rectifying,
        stepping.stripping,
        stepping.feed_stage,
    );

    Ok(DesignResult {
        balance,
        min_reflux: min.ratio,
        reflux,
        pinch: min.pinch,
        feed_intersection: lines.feed_intersection,
        rectifying: lines.rectifying,
        stripping: lines.stripping,
        stages: stepping.stages,
        stages_rectifying: stepping.rectifying,
        stages_stripping: stepping.stripping,
        feed_stage: stepping.feed_stage,
        flows: InternalFlows::new(&balance, reflux, spec.q_factor),
        termination: stepping.termination,
        warnings,
    })
}
