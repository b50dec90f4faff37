pub mod args;
mod jpg2png;
mod nii2png;
mod utils;
mod verify;

/// Case directories read by `nii2png` when no input is given.
const DEFAULT_NII_INPUT: &str = "./UCSF_BrainMetastases_v1.3/UCSF_BrainMetastases_TRAIN/";
/// Dataset root written by `nii2png` and checked by `verify` by default.
const DEFAULT_DATASET_DIR: &str = "./UCSF-BrainMetastases-master/";
const DEFAULT_JPG_INPUT: &str = "./mini_test/";
const DEFAULT_PNG_OUTPUT: &str = "./png/";
