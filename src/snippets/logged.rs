//! Method wrapping: log the arguments, call once, log the result.

use std::fmt::Debug;

/// A callable decorated with argument and result logging.
///
/// Multi-argument methods pass their arguments as a tuple.
pub struct Logged<F> {
    name: &'static str,
    f: F,
}

/// One recorded call: what went in and what came out.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<A, R> {
    pub method: &'static str,
    pub args: A,
    pub result: R,
}

impl<F> Logged<F> {
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        A: Debug,
        R: Debug,
    {
        tracing::info!("Calling {} with arguments: {:?}", self.name, args);
        let result = (self.f)(args);
        tracing::info!("Result: {:?}", result);
        result
    }

    pub fn invoke<A, R>(&self, args: A) -> Invocation<A, R>
    where
        F: Fn(A) -> R,
        A: Debug + Clone,
        R: Debug,
    {
        let result = self.call(args.clone());
        Invocation {
            method: self.name,
            args,
            result,
        }
    }
}

/// Declares a function (or a `&self` method inside an `impl`) whose body
/// runs through [`Logged`] under the function's own name.
#[macro_export]
macro_rules! logged_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident(&$self:ident $(, $arg:ident: $ty:ty)* $(,)?) -> $ret:ty $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name(&$self $(, $arg: $ty)*) -> $ret {
            $crate::snippets::logged::Logged::new(
                stringify!($name),
                |($($arg,)*): ($($ty,)*)| -> $ret { $body },
            )
            .call(($($arg,)*))
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name($($arg: $ty),*) -> $ret {
            $crate::snippets::logged::Logged::new(
                stringify!($name),
                |($($arg,)*): ($($ty,)*)| -> $ret { $body },
            )
            .call(($($arg,)*))
        }
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    crate::logged_fn! {
        pub fn multiply(&self, a: f64, b: f64) -> f64 {
            a * b
        }
    }
}
