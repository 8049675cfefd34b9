/// Returns the binomial coefficient of `n` and `k`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.;
    } else if k == 0 || k == n {
        return 1.;
    }

    let k = k.min(n - k);
    let mut r = 1.;
    for i in 0..k {
        r = r * (n - i) as f64 / (i + 1) as f64;
    }
    r
}

/// Returns the trinomial coefficient `(i + j + k)! / (i! j! k!)`.
pub fn trinomial(i: usize, j: usize, k: usize) -> f64 {
    binomial(i + j + k, i) * binomial(j + k, j)
}
