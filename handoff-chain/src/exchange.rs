pub struct Exchange<I, O> {
    input: I,
    output: Option<O>,
}

impl<I, O> Exchange<I, O> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            output: None,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn save_output(&mut self, output: O) {
        self.output = Some(output);
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    pub fn consume_output(&mut self) -> Option<O> {
        self.output.take()
    }
}

#[cfg(test)]
mod test {
    use crate::exchange::Exchange;

    #[test]
    fn test_exchange_roundtrip() {
        let mut exchange: Exchange<&str, String> = Exchange::new("banana");
        assert_eq!(*exchange.input(), "banana");
        assert!(exchange.output().is_none());

        exchange.save_output("eaten".to_string());
        assert_eq!(exchange.output().map(String::as_str), Some("eaten"));

        let taken = exchange.consume_output();
        assert_eq!(taken.as_deref(), Some("eaten"));
        assert!(exchange.output().is_none());
    }
}
