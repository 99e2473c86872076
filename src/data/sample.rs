//! Built-in sample dataset, a noisy y ≈ 2x trend.

use super::normalize::RawPoint;

pub const SAMPLE_DATA: [RawPoint; 11] = [
    RawPoint { x: 1.0, y: 2.1 },
    RawPoint { x: 1.5, y: 3.2 },
    RawPoint { x: 2.0, y: 3.9 },
    RawPoint { x: 2.5, y: 5.1 },
    RawPoint { x: 3.0, y: 6.2 },
    RawPoint { x: 3.5, y: 6.8 },
    RawPoint { x: 4.0, y: 8.3 },
    RawPoint { x: 4.5, y: 8.8 },
    RawPoint { x: 5.0, y: 10.3 },
    RawPoint { x: 5.5, y: 10.9 },
    RawPoint { x: 6.0, y: 11.8 },
];

pub fn sample_rows() -> Vec<RawPoint> {
    SAMPLE_DATA.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalize;

    #[test]
    fn test_sample_data_normalizes_cleanly() {
        let set = normalize::normalize(&sample_rows()).unwrap();
        assert_eq!(set.len(), SAMPLE_DATA.len());
        assert_eq!(set.x_domain(), (1.0, 6.0));
    }
}
