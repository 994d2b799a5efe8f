// Tests module
// Integration: store-mediated parameter updates and equality properties
