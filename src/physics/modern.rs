use crate::constants::Constants;
use crate::error::{CalcError, Constraint};
use crate::validate;

/// 상대론적 전체 에너지 E = γmc² [J]
pub fn relativistic_energy(c: &Constants, mass: f64, velocity: f64) -> Result<f64, CalcError> {
    validate::finite("mass", mass)?;
    validate::finite("velocity", velocity)?;
    let light = c.speed_of_light;
    if velocity.abs() >= light {
        return Err(CalcError::domain("velocity", Constraint::LessThan("speed_of_light")));
    }
    let beta = velocity / light;
    let gamma = 1.0 / (1.0 - beta * beta).sqrt();
    validate::finite_result("energy", gamma * mass * light * light)
}

/// 드브로이 파장 λ = h/(mv) [m]
pub fn de_broglie_wavelength(c: &Constants, mass: f64, velocity: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::positive("velocity", velocity)?;
    validate::finite_result("wavelength", c.planck_constant / (mass * velocity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rest_energy() {
        let c = Constants::default();
        assert_relative_eq!(relativistic_energy(&c, 1.0, 0.0).unwrap(), 2.998e8 * 2.998e8);
    }

    #[test]
    fn gamma_at_point_six_c() {
        let c = Constants::default();
        let e = relativistic_energy(&c, 1.0, 0.6 * c.speed_of_light).unwrap();
        assert_relative_eq!(e, 1.25 * c.speed_of_light * c.speed_of_light, max_relative = 1e-12);
    }

    #[test]
    fn light_speed_is_rejected() {
        let c = Constants::default();
        assert_eq!(
            relativistic_energy(&c, 1.0, c.speed_of_light).unwrap_err().parameter(),
            Some("velocity")
        );
        assert!(relativistic_energy(&c, 1.0, -c.speed_of_light).is_err());
    }

    #[test]
    fn electron_wavelength() {
        let c = Constants::default();
        let l = de_broglie_wavelength(&c, 9.109e-31, 1e6).unwrap();
        assert_relative_eq!(l, 7.274e-10, max_relative = 1e-3);
        assert!(de_broglie_wavelength(&c, 0.0, 1.0).is_err());
    }
}
