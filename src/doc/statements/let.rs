/*!
# `[LET] <variable>=<expression>`

## Purpose
Stores a value in a variable.

## Remarks
The word `LET` is optional. Names start with a letter and go on with
letters and digits; a string name ends in `$`. The value must be of the
same type as the variable. Builtin function names can't be assigned.

## Example
```text
LET A=5
B$="CAT"
C(2)=A*2
```

*/
