mod observer;

pub use observer::IDiscoveryObserver;
