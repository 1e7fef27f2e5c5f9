//! Frame loop between the simulation and whatever draws it

use std::ops::ControlFlow;

use crate::simulation::{BallSimulation, DiscInstance};

/// Receives one frame per tick.
///
/// Implementations draw, log or record the discs. Returning
/// `ControlFlow::Break` stops the driver after the current frame.
pub trait Presenter {
    fn present(&mut self, tick: u64, discs: &[DiscInstance]) -> ControlFlow<()>;
}

impl<F> Presenter for F
where
    F: FnMut(u64, &[DiscInstance]) -> ControlFlow<()>,
{
    fn present(&mut self, tick: u64, discs: &[DiscInstance]) -> ControlFlow<()> {
        self(tick, discs)
    }
}

/// Step the simulation and present each frame.
///
/// Runs `ticks` frames, or until the presenter breaks when `ticks` is `None`.
/// Returns the number of ticks advanced.
pub fn drive<P>(sim: &mut BallSimulation, presenter: &mut P, ticks: Option<u64>) -> u64
where
    P: Presenter + ?Sized,
{
    let mut frame = Vec::with_capacity(sim.len());
    let mut ran = 0;
    while ticks.map_or(true, |limit| ran < limit) {
        sim.step();
        ran += 1;
        sim.write_snapshot(&mut frame);
        if presenter.present(sim.tick(), &frame).is_break() {
            break;
        }
    }
    ran
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;

    #[derive(Default)]
    struct Recorder {
        ticks: Vec<u64>,
        frames: Vec<Vec<DiscInstance>>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, tick: u64, discs: &[DiscInstance]) -> ControlFlow<()> {
            self.ticks.push(tick);
            self.frames.push(discs.to_vec());
            ControlFlow::Continue(())
        }
    }

    fn sim() -> BallSimulation {
        BallSimulation::new(&SimulationParams {
            seed: Some(9),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_drive_fixed_ticks() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let ran = drive(&mut sim, &mut recorder, Some(4));

        assert_eq!(ran, 4);
        assert_eq!(recorder.ticks, vec![1, 2, 3, 4]);
        assert!(recorder.frames.iter().all(|f| f.len() == 6));
        assert_eq!(recorder.frames.last(), Some(&sim.snapshot()));
    }

    #[test]
    fn test_drive_until_presenter_stops() {
        let mut sim = sim();
        let mut presenter = |tick: u64, _: &[DiscInstance]| {
            if tick >= 25 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let ran = drive(&mut sim, &mut presenter, None);
        assert_eq!(ran, 25);
        assert_eq!(sim.tick(), 25);
    }

    #[test]
    fn test_drive_zero_ticks() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        assert_eq!(drive(&mut sim, &mut recorder, Some(0)), 0);
        assert!(recorder.ticks.is_empty());
    }
}
