mod calibration;
mod power;
mod robustness;
