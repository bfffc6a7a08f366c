//! Test data builders for creating test objects

use algovis_rs::{
    SearchAlgorithm, SequenceGenerator, SortAlgorithm, Value, ValueRange, Visualizer,
    VisualizerConfig,
};

/// Builder for creating test Visualizers
pub struct VisualizerBuilder {
    config: VisualizerConfig,
    sequence: Option<Vec<Value>>,
    seed: u64,
}

impl VisualizerBuilder {
    pub fn new() -> Self {
        Self {
            config: VisualizerConfig {
                array_size: 10,
                speed: 100,
                ..Default::default()
            },
            sequence: None,
            seed: 7,
        }
    }

    /// Show a fixed sequence instead of a seeded random one
    pub fn sequence(mut self, sequence: &[Value]) -> Self {
        self.sequence = Some(sequence.to_vec());
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.config.array_size = size;
        self
    }

    pub fn speed(mut self, speed: u32) -> Self {
        self.config.speed = speed;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn sort(mut self, algorithm: SortAlgorithm) -> Self {
        self.config.sort_algorithm = algorithm;
        self
    }

    pub fn search(mut self, algorithm: SearchAlgorithm, target: &str) -> Self {
        self.config.search_algorithm = algorithm;
        self.config.search_value = target.to_string();
        self
    }

    pub fn build(self) -> Visualizer {
        match self.sequence {
            Some(sequence) => Visualizer::with_sequence(self.config, sequence).unwrap(),
            None => {
                let generator = SequenceGenerator::with_seed(ValueRange::default(), self.seed).unwrap();
                Visualizer::with_generator(self.config, generator).unwrap()
            }
        }
    }
}

impl Default for VisualizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_builder() {
        let vis = VisualizerBuilder::new()
            .sequence(&[3, 1, 2])
            .sort(SortAlgorithm::Heap)
            .speed(90)
            .build();

        assert_eq!(vis.sequence(), vec![3, 1, 2]);
        assert_eq!(vis.config().sort_algorithm, SortAlgorithm::Heap);
        assert_eq!(vis.config().speed, 90);
    }
}
