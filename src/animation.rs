// src/animation.rs
//
// Transitions between two parameter sets. Each frame interpolates the
// animatable data and hands the result to the ordinary pure generator.

use std::time::Duration;

use crate::shapes::{Arrow, Checkerboard, Trapezoid};

pub trait Interpolate: Copy {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

/// Two values that move together, sampled at the same progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatablePair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> AnimatablePair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Interpolate, B: Interpolate> Interpolate for AnimatablePair<A, B> {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            first: self.first.lerp(&other.first, t),
            second: self.second.lerp(&other.second, t),
        }
    }
}

pub trait Animatable: Clone {
    type Data: Interpolate;

    fn animatable_data(&self) -> Self::Data;
    fn set_animatable_data(&mut self, data: Self::Data);
}

impl Animatable for Arrow {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.amount
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.amount = data;
    }
}

impl Animatable for Trapezoid {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.inset_amount
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.inset_amount = data;
    }
}

impl Animatable for Checkerboard {
    type Data = AnimatablePair<f64, f64>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair::new(self.rows as f64, self.columns as f64)
    }

    // `as` truncates toward zero and saturates negatives at zero.
    fn set_animatable_data(&mut self, data: Self::Data) {
        self.rows = data.first as usize;
        self.columns = data.second as usize;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Transition<S: Animatable> {
    pub from: S,
    pub to: S,
    pub duration: Duration,
    pub easing: Easing,
}

impl<S: Animatable> Transition<S> {
    pub fn new(from: S, to: S, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Shape at raw progress `t` in `[0, 1]`, before easing.
    pub fn at_progress(&self, t: f64) -> S {
        let eased = self.easing.apply(t);
        let data = self.from.animatable_data().lerp(&self.to.animatable_data(), eased);
        let mut shape = self.from.clone();
        shape.set_animatable_data(data);
        shape
    }

    pub fn frame_at(&self, elapsed: Duration) -> S {
        if self.duration.is_zero() {
            return self.to.clone();
        }
        self.at_progress(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// `count` evenly spaced frames including both ends.
    pub fn frames(&self, count: usize) -> Vec<S> {
        match count {
            0 => Vec::new(),
            1 => vec![self.at_progress(1.0)],
            _ => (0..count)
                .map(|i| self.at_progress(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn checkerboard_interpolates_rows_and_columns_together() {
        let transition = Transition::new(Checkerboard::new(4, 4), Checkerboard::new(8, 16), Duration::from_secs(3))
            .with_easing(Easing::Linear);

        let halfway = transition.frame_at(Duration::from_millis(1500));
        assert_eq!(halfway, Checkerboard::new(6, 10));

        // 4 + 4 * 0.3 = 5.2 and 4 + 12 * 0.3 = 7.6, both truncated.
        let early = transition.at_progress(0.3);
        assert_eq!(early, Checkerboard::new(5, 7));

        assert_eq!(transition.frame_at(Duration::from_secs(10)), Checkerboard::new(8, 16));
    }

    #[test]
    fn arrow_frames_are_monotonic() {
        let transition = Transition::new(Arrow::new(50.0), Arrow::new(130.0), Duration::from_millis(350));
        let frames = transition.frames(5);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].amount, 50.0);
        assert_eq!(frames[4].amount, 130.0);
        assert!(frames.windows(2).all(|w| w[0].amount <= w[1].amount));
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let transition = Transition::new(Trapezoid::new(10.0), Trapezoid::new(90.0), Duration::ZERO);
        assert_eq!(transition.frame_at(Duration::ZERO), Trapezoid::new(90.0));
    }
}
