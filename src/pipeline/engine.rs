use std::path::Path;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{FilterError, Result},
    filters::{DynFilter, FilterInfo, FilterRegistry},
    frame::Frame,
    options::ResolvedOptions,
};

/// A pipeline step whose filter is built and whose options are resolved
pub struct PreparedStep {
    pub key: String,
    pub filter: Box<dyn DynFilter>,
    pub options: ResolvedOptions,
}

/// Runs the configured filter pipeline over images
///
/// The engine follows a clear pipeline:
/// 1. Preparation - Build every filter and resolve its options up front
/// 2. Loading - Decode the input image to RGBA
/// 3. Filtering - Apply each step in order, on the configured worker pool
/// 4. Output - Encode the result
pub struct FilterEngine {
    config: Config,
    registry: FilterRegistry,
}

impl FilterEngine {
    /// Create a new engine with the given configuration and registry
    pub fn new(config: Config, registry: FilterRegistry) -> Self {
        Self { config, registry }
    }

    /// Build every filter and resolve its options.
    ///
    /// Any unknown filter, unknown option or illegal value fails here, before
    /// a single pixel is touched.
    pub fn prepare(&self) -> Result<Vec<PreparedStep>> {
        self.config.validate()?;

        self.config
            .pipeline
            .iter()
            .map(|step| -> Result<PreparedStep> {
                let filter = self.registry.get_filter(&step.filter)?;
                let options = filter.options().resolve(&step.options)?;
                debug!(
                    "Prepared '{}' ({}) with {} override(s)",
                    step.filter,
                    filter.name(),
                    step.options.len()
                );
                Ok(PreparedStep {
                    key: step.filter.clone(),
                    filter,
                    options,
                })
            })
            .collect()
    }

    fn build_pool(&self) -> Result<ThreadPool> {
        ThreadPoolBuilder::new()
            .num_threads(self.config.processing.threads)
            .build()
            .map_err(|e| FilterError::generic(format!("Failed to build worker pool: {}", e)))
    }

    /// Apply the whole pipeline to `frame` in place
    pub fn process_frame(&self, frame: &mut Frame) -> Result<()> {
        let steps = self.prepare()?;
        if steps.is_empty() {
            warn!("Pipeline is empty; frame left unchanged");
            return Ok(());
        }

        let pool = self.build_pool()?;
        pool.install(|| -> Result<()> {
            for step in &steps {
                debug!("Applying '{}' to {}x{} frame", step.key, frame.width(), frame.height());
                frame.apply_filter(step.filter.as_ref(), &step.options)?;
            }
            Ok(())
        })
    }

    /// Load `input`, run the pipeline, and write the result to `output`
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<()> {
        let input = input.as_ref();
        let output = output.as_ref();

        info!("Loading image: {:?}", input);
        let mut frame = Frame::open(input)?;
        info!("   Loaded: {}x{}", frame.width(), frame.height());

        let names: Vec<&str> = self.config.pipeline.iter().map(|s| s.filter.as_str()).collect();
        info!("Applying pipeline: [{}]", names.join(", "));
        self.process_frame(&mut frame)?;

        frame.save(output)?;
        info!("Output saved to: {:?}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FilterStep, error::OptionError};

    fn engine_with(steps: Vec<FilterStep>) -> FilterEngine {
        let mut config = Config::default();
        config.processing.threads = 2;
        config.pipeline = steps;
        FilterEngine::new(config, FilterRegistry::new())
    }

    #[test]
    fn test_prepare_resolves_defaults_and_overrides() {
        let engine = engine_with(vec![FilterStep::new("grid").set("stripes", 4)]);
        let steps = engine.prepare().unwrap();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].options.get_i64("stripes"), Some(4));
        assert_eq!(steps[0].options.get_str("rowColor"), Some("#ff0000"));
    }

    #[test]
    fn test_prepare_fails_fast_on_unknown_option() {
        let engine = engine_with(vec![
            FilterStep::new("brightness"),
            FilterStep::new("grid").set("stripe", 4),
        ]);
        assert!(matches!(
            engine.prepare(),
            Err(FilterError::Option(OptionError::Unknown { .. }))
        ));
    }

    #[test]
    fn test_prepare_fails_on_unknown_filter() {
        let engine = engine_with(vec![FilterStep::new("sepia")]);
        assert!(matches!(engine.prepare(), Err(FilterError::Registry(_))));
    }

    #[test]
    fn test_steps_run_in_order() {
        let engine = engine_with(vec![
            FilterStep::new("grid")
                .set("stripes", 2)
                .set("strength", 100)
                .set("colColor", "#204060"),
            FilterStep::new("brightness").set("invert", true),
        ]);

        let mut frame = Frame::new_filled(4, 4, [0, 0, 0, 90]);
        engine.process_frame(&mut frame).unwrap();

        // column band: grid paints #204060, then brightness inverts it
        assert_eq!(frame.get_pixel(3, 0), [0xdf, 0xbf, 0x9f, 90]);
        // untouched by grid, inverted black
        assert_eq!(frame.get_pixel(0, 0), [255, 255, 255, 90]);
    }

    #[test]
    fn test_empty_pipeline_leaves_frame() {
        let engine = engine_with(Vec::new());
        let mut frame = Frame::new_filled(2, 2, [9, 8, 7, 6]);
        engine.process_frame(&mut frame).unwrap();
        assert_eq!(frame, Frame::new_filled(2, 2, [9, 8, 7, 6]));
    }

    #[test]
    fn test_process_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        Frame::new_filled(6, 6, [100, 100, 100, 255]).save(&input).unwrap();

        let engine = engine_with(vec![FilterStep::new("grid").set("stripes", 3).set("strength", 100)]);
        engine.process_file(&input, &output).unwrap();

        let result = Frame::open(&output).unwrap();
        assert_eq!(result.get_pixel(0, 0), [100, 100, 100, 255]);
        assert_eq!(result.get_pixel(0, 2), [255, 0, 0, 255]);
        assert_eq!(result.get_pixel(2, 0), [0, 0, 255, 255]);
    }
}
