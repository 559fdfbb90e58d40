use rand::Rng;

use crate::application::ports::reply_picker::ReplyPicker;

/// Uniform pick using the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngPicker;

impl ReplyPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_stay_in_range_and_cover_table() {
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let index = ThreadRngPicker.pick(6);
            assert!(index < 6);
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn empty_table_yields_zero() {
        assert_eq!(ThreadRngPicker.pick(0), 0);
    }
}
