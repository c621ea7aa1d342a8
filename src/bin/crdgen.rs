//! Print the operator's CRD manifests as a multi-document YAML stream

use aqua_operator::crd::{AquaEnforcer, AquaKubeEnforcer, AquaLightning};
use kube::CustomResourceExt;

fn main() {
    for crd in [
        AquaLightning::crd(),
        AquaKubeEnforcer::crd(),
        AquaEnforcer::crd(),
    ] {
        println!("---");
        print!("{}", serde_yaml::to_string(&crd).expect("serialize CRD to YAML"));
    }
}
