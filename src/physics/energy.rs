use crate::constants::Constants;
use crate::error::CalcError;
use crate::validate;

/// KE = ½mv²
pub fn kinetic_energy(mass: f64, velocity: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::finite("velocity", velocity)?;
    validate::finite_result("kinetic_energy", 0.5 * mass * velocity * velocity)
}

/// PE = mgh
pub fn potential_energy(c: &Constants, mass: f64, height: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::finite("height", height)?;
    validate::finite_result("potential_energy", mass * c.standard_gravity * height)
}

/// W = F·d·cosθ (θ 는 도)
pub fn work_done(c: &Constants, force: f64, distance: f64, angle_deg: f64) -> Result<f64, CalcError> {
    validate::finite("force", force)?;
    validate::finite("distance", distance)?;
    validate::finite("angle", angle_deg)?;
    validate::finite_result("work", force * distance * c.degrees_to_radians(angle_deg).cos())
}

/// P = W/t
pub fn power(work: f64, time: f64) -> Result<f64, CalcError> {
    validate::finite("work", work)?;
    validate::positive("time", time)?;
    validate::finite_result("power", work / time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn energies() {
        let c = Constants::default();
        assert_eq!(kinetic_energy(2.0, 3.0), Ok(9.0));
        assert_abs_diff_eq!(potential_energy(&c, 1.0, 10.0).unwrap(), 98.07, epsilon = 1e-9);
        assert!(kinetic_energy(0.0, 3.0).is_err());
    }

    #[test]
    fn work_at_angles() {
        let c = Constants::default();
        assert_abs_diff_eq!(work_done(&c, 10.0, 5.0, 0.0).unwrap(), 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(work_done(&c, 10.0, 5.0, 60.0).unwrap(), 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(work_done(&c, 10.0, 5.0, 90.0).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn power_needs_positive_time() {
        assert_eq!(power(100.0, 4.0), Ok(25.0));
        assert_eq!(power(100.0, 0.0).unwrap_err().parameter(), Some("time"));
    }
}
