//! The chart engine: validated configuration plus the selected strategies.

use std::fmt::Formatter;

use sanmei_base::{RuleTenStars, TableTenStars, TenStarMethod, TenStarSource, validate_tables};
use sanmei_search::{
    AstronomicalSolarTerms, NominalSolarTerms, PillarResolution, SolarTermMode, SolarTermSource,
    elapsed_days, resolve_pillars,
};

use crate::chart::{BirthInput, FateChart, build_chart};
use crate::config::ChartConfig;
use crate::error::ChartError;

/// Computes fate charts. Immutable after construction, so one engine can be
/// shared across threads.
pub struct Engine {
    config: ChartConfig,
    solar_terms: Box<dyn SolarTermSource>,
    ten_stars: Box<dyn TenStarSource>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("solar_terms", &self.solar_terms.mode())
            .field("ten_stars", &self.ten_stars.method())
            .finish()
    }
}

impl Engine {
    /// Validate `config`, run the table self-checks and build the engine.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let ten_stars: Box<dyn TenStarSource> = match config.ten_star_method {
            TenStarMethod::Rule => Box::new(RuleTenStars),
            TenStarMethod::Table => Box::new(TableTenStars::default()),
        };
        Self::with_ten_star_source(config, ten_stars)
    }

    /// Like [`Engine::new`] with a caller-supplied ten-star source.
    ///
    /// The source is self-checked like the built-in ones; `ten_star_method`
    /// in the config is overridden by the source's own method.
    pub fn with_ten_star_source(
        mut config: ChartConfig,
        ten_stars: Box<dyn TenStarSource>,
    ) -> Result<Self, ChartError> {
        let _span = tracing::info_span!("engine_init").entered();
        config.validate().map_err(ChartError::InvalidConfig)?;
        config.ten_star_method = ten_stars.method();

        if let Err(e) = validate_tables(ten_stars.as_ref()) {
            tracing::error!(error = %e, "table self-check failed");
            return Err(e.into());
        }

        let solar_terms: Box<dyn SolarTermSource> = match config.solar_terms {
            SolarTermMode::Nominal => Box::new(NominalSolarTerms),
            SolarTermMode::Astronomical => Box::new(AstronomicalSolarTerms::new(config.search)?),
        };

        tracing::info!(
            solar_terms = config.solar_terms.name(),
            ten_stars = ?config.ten_star_method,
            hidden_stem_basis = config.hidden_stem_basis.name(),
            "engine ready"
        );
        Ok(Self {
            config,
            solar_terms,
            ten_stars,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Solar-term mode every result of this engine carries.
    pub fn solar_term_mode(&self) -> SolarTermMode {
        self.solar_terms.mode()
    }

    pub fn solar_terms(&self) -> &dyn SolarTermSource {
        self.solar_terms.as_ref()
    }

    pub fn ten_stars(&self) -> &dyn TenStarSource {
        self.ten_stars.as_ref()
    }

    /// Four pillars only.
    pub fn pillars(&self, input: &BirthInput) -> Result<PillarResolution, ChartError> {
        let birth = input.to_birth_moment()?;
        Ok(resolve_pillars(
            self.solar_terms.as_ref(),
            &birth,
            &self.config.resolve_config(),
        )?)
    }

    /// Full chart for `input`.
    pub fn compute(&self, input: &BirthInput) -> Result<FateChart, ChartError> {
        let birth = input.to_birth_moment()?;
        let resolution = resolve_pillars(
            self.solar_terms.as_ref(),
            &birth,
            &self.config.resolve_config(),
        )?;
        let basis = self.config.hidden_stem_basis;
        let elapsed = elapsed_days(self.solar_terms.as_ref(), basis, &resolution, birth.zone)?;

        if let Some(w) = &resolution.boundary {
            tracing::warn!(
                term = %w.term,
                hours_from_entry = w.hours_from_entry,
                mode = resolution.mode.name(),
                "birth is close to a month-term entry"
            );
        }
        tracing::debug!(pillars = %resolution.pillars, "chart computed");

        Ok(build_chart(
            input,
            &birth,
            &resolution,
            basis,
            elapsed,
            self.ten_stars.as_ref(),
        ))
    }
}
