/// Probability that the sum of two independent rolls of an `n` sided die is `x`.
///
/// For two n-sided dice the sum follows a triangular distribution:
/// `(n - |x - (n + 1)|) / n^2` for `x` in `2..=2n`, peaking at `x = n + 1`.\
/// No range check is done, any `x` outside `2..=2n` gives a value `<= 0`.
pub fn two_dice_sum_probability(x: i64, n: u32) -> f64 {
    let n = f64::from(n);
    let x = x as f64;

    (n - (x - (n + 1.0)).abs()) / (n * n)
}
