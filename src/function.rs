use std::fmt::Debug;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::environment::Environment;
use crate::interpreter::Interpreter;
use crate::object::{Object, Callable};
use crate::error::Unwind;
use crate::stmt::{Stmt, FunctionData};
use crate::token::{Token, Type};
use crate::literal::Literal;

/// A user-defined function or method, closing over the environment that was
/// live at its declaration site.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
    pub closure: Rc<RefCell<Environment>>,
    pub is_initializer: bool,
}

impl Function {
    pub fn new(declaration: &FunctionData, closure: Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        Function {
            name: declaration.name.clone(),
            params: declaration.params.clone(),
            body: declaration.body.clone(),
            closure,
            is_initializer,
        }
    }

    /// Returns a copy of this function whose closure has `this` bound to
    /// `instance`. Called when a method is looked up on an instance, not
    /// when it is declared.
    pub fn bind(&self, instance: Object) -> Function {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.closure)))));
        environment.borrow_mut().define("this", instance);

        Function {
            name: self.name.clone(),
            params: self.params.clone(),
            body: self.body.clone(),
            closure: environment,
            is_initializer: self.is_initializer,
        }
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, Unwind> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        self.params.iter().zip(arguments.iter()).for_each(|(param, arg)| {
            environment.define(&param.lexeme, arg.to_owned());
        });

        let result = interpreter.execute_block(&self.body, Rc::new(RefCell::new(environment)));

        if self.is_initializer {
            let this = self.closure.borrow().get_at(0, &Token::from("this"))
                .expect("initializer closure to hold a bound `this`");
            return Ok(this);
        }

        match result {
            Ok(()) => Ok(Object::from(Literal::Nil)),
            Err(Unwind::Return(value)) => Ok(value),
            Err(err) => Err(err),
        }
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.name.lexeme)
    }
}

#[derive(Clone)]
pub struct NativeFunction {
    pub name: Token,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, Unwind>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, Unwind> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    pub fn get_globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: Token::new(Type::Identifier, "clock".to_owned(), None, 0),
                arity: 0,
                function: |_, _| {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap()
                        .as_millis();
                    Ok(Object::from(now as f64 / 1000.0))
                },
            },
        ]
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn>")
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name.lexeme)
    }
}
