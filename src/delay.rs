use embassy_time::Duration;

/// Blocking sleep between animation steps
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration);
    }
}

/// Busy-waits on the `embassy-time` driver clock
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingDelay;

impl Delay for BlockingDelay {
    fn delay(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
